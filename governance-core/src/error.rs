use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::pagination::PageError;
use crate::problem::ValidationProblem;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Access denied: {0}")]
    AccessDenied(&'static str),

    #[error(transparent)]
    InvalidPageParameters(#[from] PageError),

    #[error("One or more validation errors occurred")]
    ValidationFailed(ValidationProblem),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<ValidationProblem> for AppError {
    fn from(problem: ValidationProblem) -> Self {
        AppError::ValidationFailed(problem)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
        }

        let (status, error_message, details) = match self {
            AppError::AccessDenied(reason) => (StatusCode::FORBIDDEN, reason.to_string(), None),
            AppError::InvalidPageParameters(err) => {
                (StatusCode::BAD_REQUEST, err.to_string(), None)
            }
            // Validation failures carry their own document shape.
            AppError::ValidationFailed(problem) => return problem.into_response(),
            AppError::BadRequest(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(format!("{:#?}", err)),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorization::MISSING_ROLE_REASON;

    #[test]
    fn test_access_denied_maps_to_forbidden() {
        let response = AppError::AccessDenied(MISSING_ROLE_REASON).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_invalid_page_parameters_maps_to_bad_request() {
        let err = PageError::InvalidPageParameters {
            page_number: 0,
            page_size: 10,
        };
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_failed_renders_problem_document() {
        let problem = ValidationProblem::new(
            [("name".to_string(), vec!["Name is required".to_string()])],
            "/api/kiosks/1",
        );
        let response = AppError::ValidationFailed(problem).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
