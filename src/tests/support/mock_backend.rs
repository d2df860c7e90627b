use async_trait::async_trait;
use mockall::mock;

use crate::modules::project::application::domain::entities::{Project, ProjectDraft, ProjectId};
use crate::modules::project::application::ports::outgoing::project_backend::{
    ProjectBackend, ProjectBackendError,
};

mock! {
    pub ProjectBackendMock {}
    #[async_trait]
    impl ProjectBackend for ProjectBackendMock {
        async fn list_projects(&self) -> Result<Vec<Project>, ProjectBackendError>;
        async fn create_project(&self, draft: ProjectDraft) -> Result<(), ProjectBackendError>;
        async fn update_project(
            &self,
            id: ProjectId,
            draft: ProjectDraft,
        ) -> Result<(), ProjectBackendError>;
        async fn delete_project(&self, id: ProjectId) -> Result<(), ProjectBackendError>;
    }
}
