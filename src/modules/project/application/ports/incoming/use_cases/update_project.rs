use async_trait::async_trait;

use super::ProjectStoreError;
use crate::modules::project::application::domain::entities::{ProjectDraft, ProjectId};

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Full replacement of the fields the draft carries, `createdAt` included.
#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: ProjectId, draft: ProjectDraft) -> Result<(), ProjectStoreError>;
}
