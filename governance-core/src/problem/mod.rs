//! Uniform problem document for validation failures.
//!
//! Every rejected payload renders the same document shape; only the request
//! path and the per-field error map vary per call. There is no success path
//! here, the document exists solely to describe failures detected elsewhere.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

pub const PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.1";
pub const PROBLEM_TITLE: &str = "One or more validation errors occurred.";
pub const PROBLEM_DETAIL: &str = "See the errors property for details.";

/// RFC 7807-style document describing why a request was rejected.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationProblem {
    #[serde(rename = "type")]
    pub problem_type: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub detail: &'static str,
    /// The request path the failure occurred on.
    pub instance: String,
    /// Field name to ordered failure messages.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationProblem {
    /// Build the document from a per-field error map. Fields with no messages
    /// are dropped; message order within a field is preserved.
    pub fn new(
        per_field_errors: impl IntoIterator<Item = (String, Vec<String>)>,
        instance: impl Into<String>,
    ) -> Self {
        let errors = per_field_errors
            .into_iter()
            .filter(|(_, messages)| !messages.is_empty())
            .collect();
        Self {
            problem_type: PROBLEM_TYPE,
            title: PROBLEM_TITLE,
            status: StatusCode::BAD_REQUEST.as_u16(),
            detail: PROBLEM_DETAIL,
            instance: instance.into(),
            errors,
        }
    }

    /// Flatten `validator` crate failures into the document. Messages fall
    /// back to the error code when the rule attached none.
    pub fn from_validation_errors(errors: &ValidationErrors, instance: &str) -> Self {
        let mut flattened = BTreeMap::new();
        flatten_errors(errors, "", &mut flattened);
        Self::new(flattened, instance)
    }
}

fn flatten_errors(
    errors: &ValidationErrors,
    prefix: &str,
    out: &mut BTreeMap<String, Vec<String>>,
) {
    for (field, kind) in errors.errors() {
        let name = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .clone()
                            .unwrap_or_else(|| e.code.clone())
                            .to_string()
                    })
                    .collect();
                if !messages.is_empty() {
                    out.entry(name).or_default().extend(messages);
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_errors(nested, &name, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_errors(nested, &format!("{}[{}]", name, index), out);
                }
            }
        }
    }
}

impl IntoResponse for ValidationProblem {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}
