use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::validation::HasAnyValue;

/// Partial update for a product listed by a kiosk.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = has_updates))]
pub struct UpdateProductRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "Price must be at least one cent"))]
    pub price_cents: Option<i64>,

    pub category_id: Option<Uuid>,

    pub available: Option<bool>,
}

impl HasAnyValue for UpdateProductRequest {
    fn has_any_value(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.price_cents.is_some()
            || self.category_id.is_some()
            || self.available.is_some()
    }
}

fn has_updates(request: &UpdateProductRequest) -> Result<(), ValidationError> {
    crate::validation::validate_has_any_value(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_request() -> UpdateProductRequest {
        UpdateProductRequest {
            name: None,
            description: None,
            price_cents: None,
            category_id: None,
            available: None,
        }
    }

    #[test]
    fn test_empty_update_is_rejected() {
        assert!(empty_request().validate().is_err());
    }

    #[test]
    fn test_category_reference_alone_is_enough() {
        let request = UpdateProductRequest {
            category_id: Some(Uuid::new_v4()),
            ..empty_request()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_zero_price_fails_range_rule() {
        let request = UpdateProductRequest {
            price_cents: Some(0),
            ..empty_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price_cents"));
    }
}
