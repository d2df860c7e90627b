pub mod api_config;
pub mod project_backend_http;

pub use api_config::{ApiConfig, ConfigError};
pub use project_backend_http::HttpProjectBackend;
