mod create_project;
mod delete_project;
mod load_projects;
mod project_sync_error;
mod update_project;

pub use create_project::CreateProjectUseCase;
pub use delete_project::DeleteProjectUseCase;
pub use load_projects::LoadProjectsUseCase;
pub use project_sync_error::ProjectStoreError;
pub use update_project::UpdateProjectUseCase;
