use async_trait::async_trait;

use super::ProjectStoreError;

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoadProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), ProjectStoreError>;
}
