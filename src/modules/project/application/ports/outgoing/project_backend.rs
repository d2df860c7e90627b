// src/modules/project/application/ports/outgoing/project_backend.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectDraft, ProjectId};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
// Every variant is a transport failure from the store's point of view:
// the attempted call did not take effect locally.
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectBackendError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("backend responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectBackend: Send + Sync {
    /// GET /projects, in backend order.
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectBackendError>;

    /// POST /projects. The response body is not read; callers reload instead.
    async fn create_project(&self, draft: ProjectDraft) -> Result<(), ProjectBackendError>;

    /// PUT /projects/{id}
    async fn update_project(
        &self,
        id: ProjectId,
        draft: ProjectDraft,
    ) -> Result<(), ProjectBackendError>;

    /// DELETE /projects/{id}
    async fn delete_project(&self, id: ProjectId) -> Result<(), ProjectBackendError>;
}
