//! Presence validation for partial-update payloads.
//!
//! Update endpoints accept payloads where every field is optional; a payload
//! that sets nothing is rejected before it reaches business logic. Each DTO
//! enumerates its own fields in a [`HasAnyValue`] impl (a static schema, so
//! the check is visible at the type rather than discovered at runtime), and
//! plugs into the `validator` crate as a schema-level rule so it composes
//! with per-field rules.

use std::borrow::Cow;

use validator::ValidationError;

/// Error code reported when a partial-update payload sets no fields.
pub const AT_LEAST_ONE_FIELD: &str = "at_least_one_field";

/// Reports whether at least one of the object's fields carries a value.
pub trait HasAnyValue {
    fn has_any_value(&self) -> bool;
}

/// Presence check over an optional payload.
///
/// An absent payload passes: there is no object to check, so the caller skips
/// the update entirely rather than rejecting the request. This permissive
/// default is deliberate and relied upon by callers.
pub fn has_at_least_one_value<T: HasAnyValue>(obj: Option<&T>) -> bool {
    match obj {
        None => true,
        Some(obj) => obj.has_any_value(),
    }
}

/// Schema-level rule for the `validator` crate: fails with the
/// [`AT_LEAST_ONE_FIELD`] code when the payload sets no fields.
pub fn validate_has_any_value<T: HasAnyValue>(obj: &T) -> Result<(), ValidationError> {
    if obj.has_any_value() {
        Ok(())
    } else {
        let mut error = ValidationError::new(AT_LEAST_ONE_FIELD);
        error.message = Some(Cow::Borrowed("At least one field must be provided"));
        Err(error)
    }
}
