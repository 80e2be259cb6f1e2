use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::validation::HasAnyValue;

/// Partial update for a kiosk profile. Absent fields are left untouched;
/// a payload that sets nothing is rejected by the schema-level rule.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = has_updates))]
pub struct UpdateKioskRequest {
    #[validate(length(
        min = 1,
        max = 120,
        message = "Name must be between 1 and 120 characters"
    ))]
    pub name: Option<String>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    pub open_for_business: Option<bool>,
}

impl HasAnyValue for UpdateKioskRequest {
    fn has_any_value(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.image_url.is_some()
            || self.open_for_business.is_some()
    }
}

fn has_updates(request: &UpdateKioskRequest) -> Result<(), ValidationError> {
    crate::validation::validate_has_any_value(request)
}
