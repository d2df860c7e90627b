pub mod project_backend;

pub use project_backend::{ProjectBackend, ProjectBackendError};
