//! Image download and retrieval handlers.

use crate::api::AppState;
use crate::error::{ApiError, Error};
use crate::types::DownloadRequest;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// POST /images/download - Fetch a batch of image URLs into storage
#[utoipa::path(
    post,
    path = "/images/download",
    tag = "images",
    request_body = crate::types::DownloadRequest,
    responses(
        (status = 200, description = "Batch ran to completion; per-URL outcomes in the report", body = crate::types::DownloadReport),
        (status = 400, description = "No image URLs provided", body = crate::types::DownloadReport),
        (status = 500, description = "Orchestration fault; partial results in details", body = crate::error::ApiError)
    )
)]
pub async fn download_images(
    State(state): State<AppState>,
    Json(request): Json<DownloadRequest>,
) -> Response {
    tracing::info!(
        urls = request.image_urls.len(),
        max_at_once = request.max_download_at_once,
        "Received batch download request"
    );

    let had_urls = !request.image_urls.is_empty();
    let report = state.downloader.download_batch(request).await;

    if report.success {
        (StatusCode::OK, Json(report)).into_response()
    } else if !had_urls {
        // Validation-level failure: the report itself is the 400 body
        (StatusCode::BAD_REQUEST, Json(report)).into_response()
    } else {
        // Orchestration fault; keep whatever partial results landed
        tracing::error!(message = %report.message, "Batch download failed");
        let api_error = ApiError::with_details(
            "internal_error",
            report.message,
            json!({ "urlAndNames": report.url_and_names }),
        );
        (StatusCode::INTERNAL_SERVER_ERROR, Json(api_error)).into_response()
    }
}

/// GET /images/:name - Return a stored image base64-encoded
#[utoipa::path(
    get,
    path = "/images/{name}",
    tag = "images",
    params(
        ("name" = String, Path, description = "Local key of the stored image")
    ),
    responses(
        (status = 200, description = "Base64-encoded image content"),
        (status = 400, description = "Invalid image name"),
        (status = 404, description = "No image stored under this name"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_image_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    tracing::info!(name = %name, "Requesting stored image");

    match state.downloader.image_base64(&name).await {
        Ok(base64_string) => {
            (StatusCode::OK, Json(json!({ "base64String": base64_string }))).into_response()
        }
        Err(Error::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("Image '{name}' not found") })),
        )
            .into_response(),
        Err(Error::Validation(message)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
        }
        Err(e) => {
            tracing::error!(name = %name, error = %e, "Failed to read stored image");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
                .into_response()
        }
    }
}
