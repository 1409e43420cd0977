//! OpenAPI documentation and schema generation
//!
//! Defines the OpenAPI specification for the image-dl REST API using utoipa
//! for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the image-dl REST API
///
/// The spec can be accessed via:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "image-dl REST API",
        version = "0.1.0",
        description = "Batch image downloading with bounded concurrency and base64 retrieval of stored images",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    paths(
        // Images
        crate::api::routes::download_images,
        crate::api::routes::get_image_by_name,

        // System
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        // Core types from types.rs
        crate::types::DownloadRequest,
        crate::types::DownloadReport,

        // Config types from config.rs
        crate::config::Config,
        crate::config::StorageConfig,
        crate::config::FetchConfig,
        crate::config::ApiConfig,

        // Error types from error.rs
        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "images", description = "Image operations - Batch downloads and stored image retrieval"),
        (name = "system", description = "System endpoints - Health checks and OpenAPI spec"),
    )
)]
pub struct ApiDoc;
