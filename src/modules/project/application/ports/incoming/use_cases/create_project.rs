use async_trait::async_trait;

use super::ProjectStoreError;
use crate::modules::project::application::domain::entities::ProjectDraft;

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, draft: ProjectDraft) -> Result<(), ProjectStoreError>;
}
