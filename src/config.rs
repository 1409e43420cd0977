//! Configuration types for image-dl

use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::PathBuf, time::Duration};
use utoipa::ToSchema;

/// Storage configuration (where fetched images land)
///
/// The storage directory is an explicit configuration value; nothing in the
/// crate depends on the process working directory. The directory is created
/// on first use if absent.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StorageConfig {
    /// Directory holding stored images as a flat namespace of named blobs
    /// (default: "./downloaded-images")
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,

    /// Extension used when one cannot be inferred from a URL (default: "jpg")
    #[serde(default = "default_extension")]
    pub default_extension: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            default_extension: default_extension(),
        }
    }
}

/// HTTP fetch configuration
///
/// Applies to the shared client used by every fetch worker. There is no
/// retry policy; a timed-out or failed request is reported as that URL's
/// failure outcome.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FetchConfig {
    /// Per-request timeout (default: 30 seconds)
    #[serde(default = "default_request_timeout", with = "duration_serde")]
    pub request_timeout: Duration,

    /// Optional User-Agent header for outgoing requests
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            user_agent: None,
        }
    }
}

/// REST API configuration
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiConfig {
    /// Address to bind to (default: 127.0.0.1:6789)
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable CORS for browser access (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Enable Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: true,
        }
    }
}

/// Main configuration for [`ImageDownloader`](crate::ImageDownloader)
///
/// Sub-configs are flattened for serialization, so the JSON/TOML format stays
/// flat (no nesting). Everything has a sensible default; `Config::default()`
/// yields a working instance that stores under "./downloaded-images".
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// Storage settings (directory, fallback extension)
    #[serde(flatten)]
    pub storage: StorageConfig,

    /// HTTP fetch settings (timeout, user agent)
    #[serde(flatten)]
    pub fetch: FetchConfig,

    /// REST API settings (bind address, CORS, Swagger UI)
    #[serde(flatten)]
    pub server: ApiConfig,
}

// Convenience accessors, delegating to the sub-config structs.
impl Config {
    /// Storage directory
    pub fn storage_dir(&self) -> &PathBuf {
        &self.storage.storage_dir
    }

    /// API bind address
    pub fn bind_address(&self) -> SocketAddr {
        self.server.bind_address
    }
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("./downloaded-images")
}

fn default_extension() -> String {
    "jpg".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 6789))
}

fn default_true() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

// Duration serialization helper (seconds as integer)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
