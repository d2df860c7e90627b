use async_trait::async_trait;

use super::ProjectStoreError;
use crate::modules::project::application::domain::entities::ProjectId;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: ProjectId) -> Result<(), ProjectStoreError>;
}
