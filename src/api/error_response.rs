//! HTTP error response handling for the API
//!
//! Conversions from domain errors to HTTP responses with appropriate status
//! codes and JSON error bodies.

use crate::error::{ApiError, Error, ToHttpStatus};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Implement IntoResponse for Error to automatically convert errors to HTTP responses
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let api_error: ApiError = self.into();

        (status_code, Json(api_error)).into_response()
    }
}

/// Implement IntoResponse for ApiError for explicit error responses
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Default to 500 when converting an ApiError directly; errors with a
        // meaningful status go through Error::into_response
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn not_found_maps_to_404() {
        let error = Error::NotFound("abc.png".to_string());
        assert_eq!(error.status_code(), 404);
        assert_eq!(error.error_code(), "not_found");
    }

    #[test]
    fn validation_maps_to_400() {
        let error = Error::Validation("Image name cannot be empty".to_string());
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.error_code(), "validation_error");
    }

    #[tokio::test]
    async fn error_into_response_carries_status_and_body() {
        let error = Error::NotFound("abc.png".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let api_error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(api_error.error.code, "not_found");
        assert!(api_error.error.message.contains("abc.png"));
    }

    #[tokio::test]
    async fn fetch_error_into_response_is_502_with_details() {
        let error = Error::Fetch(FetchError::Status {
            url: "http://x/a.png".to_string(),
            status: 404,
        });
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let api_error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(api_error.error.code, "fetch_bad_status");
        assert_eq!(api_error.error.details.unwrap()["status"], 404);
    }

    #[tokio::test]
    async fn bare_api_error_defaults_to_500() {
        let api_error = ApiError::internal("something broke");
        let response = api_error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
