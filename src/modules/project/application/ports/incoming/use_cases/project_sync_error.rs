use crate::modules::project::application::domain::entities::ProjectId;
use crate::modules::project::application::ports::outgoing::project_backend::ProjectBackendError;

/// Shared by every list-sync use case. A write that succeeded but whose
/// follow-up reload failed is reported as `Load`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectStoreError {
    #[error("failed to load projects: {0}")]
    Load(ProjectBackendError),

    #[error("failed to create project: {0}")]
    Create(ProjectBackendError),

    #[error("failed to update project {id}: {source}")]
    Update {
        id: ProjectId,
        source: ProjectBackendError,
    },

    #[error("failed to delete project {id}: {source}")]
    Delete {
        id: ProjectId,
        source: ProjectBackendError,
    },
}
