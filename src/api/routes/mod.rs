//! API route handlers, grouped by concern.

mod images;
mod system;

pub use images::{
    __path_download_images, __path_get_image_by_name, download_images, get_image_by_name,
};
pub use system::{__path_health_check, __path_openapi_spec, health_check, openapi_spec};
