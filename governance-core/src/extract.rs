use axum::{
    Json,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::problem::ValidationProblem;

/// JSON extractor that runs `validator` rules and renders failures as a
/// [`ValidationProblem`] with the request path as the instance.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_string();

        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            ValidationProblem::new(
                [("$".to_string(), vec![format!("Json parse error: {}", e)])],
                instance.clone(),
            )
            .into_response()
        })?;

        value.validate().map_err(|e| {
            tracing::debug!(instance = %instance, "Request payload failed validation");
            ValidationProblem::from_validation_errors(&e, &instance).into_response()
        })?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::UpdateKioskRequest;
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest, StatusCode};

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("PUT")
            .uri("/api/kiosks/42")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload_is_extracted() {
        let req = json_request(r#"{"name": "Corner Kiosk"}"#);
        let extracted = ValidatedJson::<UpdateKioskRequest>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(extracted.0.name.as_deref(), Some("Corner Kiosk"));
    }

    #[tokio::test]
    async fn test_empty_update_renders_problem_document() {
        let req = json_request("{}");
        let response = ValidatedJson::<UpdateKioskRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["title"], "One or more validation errors occurred.");
        assert_eq!(body["instance"], "/api/kiosks/42");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_field_failure_lists_field_in_errors() {
        let req = json_request(r#"{"image_url": "not a url"}"#);
        let response = ValidatedJson::<UpdateKioskRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert!(body["errors"]["image_url"].is_array());
    }

    #[tokio::test]
    async fn test_malformed_json_renders_problem_document() {
        let req = json_request("{not json");
        let response = ValidatedJson::<UpdateKioskRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["instance"], "/api/kiosks/42");
        assert!(body["errors"]["$"].is_array());
    }
}
