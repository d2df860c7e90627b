use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::modules::project::application::domain::entities::{Project, ProjectDraft, ProjectId};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, LoadProjectsUseCase, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_backend::ProjectBackend;

pub use crate::modules::project::application::ports::incoming::use_cases::ProjectStoreError;

//
// ──────────────────────────────────────────────────────────
// Observable state
// ──────────────────────────────────────────────────────────
//

/// What a subscriber sees: the current list plus whether any load is running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    projects: Vec<Project>,
    loads_in_flight: usize,
}

impl StoreSnapshot {
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn is_loading(&self) -> bool {
        self.loads_in_flight > 0
    }
}

/// Marks a load as in flight until dropped, including when the load future
/// is dropped before completion.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<StoreSnapshot>,
}

impl<'a> LoadingGuard<'a> {
    fn begin(state: &'a watch::Sender<StoreSnapshot>) -> Self {
        state.send_modify(|s| s.loads_in_flight += 1);
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state
            .send_modify(|s| s.loads_in_flight = s.loads_in_flight.saturating_sub(1));
    }
}

//
// ──────────────────────────────────────────────────────────
// Store
// ──────────────────────────────────────────────────────────
//

/// Owns the authoritative project list. Every successful write is followed
/// by a full reload; the list is only ever replaced wholesale.
pub struct ProjectStore<B>
where
    B: ProjectBackend,
{
    backend: B,
    state: watch::Sender<StoreSnapshot>,
}

impl<B> ProjectStore<B>
where
    B: ProjectBackend,
{
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: watch::Sender::new(StoreSnapshot::default()),
        }
    }

    pub fn projects(&self) -> Vec<Project> {
        self.state.borrow().projects.clone()
    }

    pub fn get(&self, id: &ProjectId) -> Option<Project> {
        self.state
            .borrow()
            .projects
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.state.subscribe()
    }

    /// Replaces the local list with the backend's. On failure the previous
    /// list is kept.
    pub async fn load(&self) -> Result<(), ProjectStoreError> {
        let _loading = LoadingGuard::begin(&self.state);
        debug!("Loading projects");

        match self.backend.list_projects().await {
            Ok(projects) => {
                let projects = retain_well_formed(projects);
                info!("Loaded {} projects", projects.len());
                self.state.send_modify(|s| s.projects = projects);
                Ok(())
            }
            Err(e) => {
                error!("Error loading projects: {}", e);
                Err(ProjectStoreError::Load(e))
            }
        }
    }

    pub async fn create(&self, draft: ProjectDraft) -> Result<(), ProjectStoreError> {
        debug!("Creating project {:?}", draft.title);

        if let Err(e) = self.backend.create_project(draft).await {
            error!("Error adding project: {}", e);
            return Err(ProjectStoreError::Create(e));
        }

        self.load().await
    }

    /// The draft is sent as-is; immutable fields it carries (`createdAt`)
    /// are not merged or filled in here.
    pub async fn update(&self, id: &ProjectId, draft: ProjectDraft) -> Result<(), ProjectStoreError> {
        debug!("Updating project {}", id);

        if let Err(e) = self.backend.update_project(id.clone(), draft).await {
            error!("Error updating project {}: {}", id, e);
            return Err(ProjectStoreError::Update {
                id: id.clone(),
                source: e,
            });
        }

        self.load().await
    }

    pub async fn delete(&self, id: &ProjectId) -> Result<(), ProjectStoreError> {
        debug!("Deleting project {}", id);

        if let Err(e) = self.backend.delete_project(id.clone()).await {
            error!("Error deleting project {}: {}", id, e);
            return Err(ProjectStoreError::Delete {
                id: id.clone(),
                source: e,
            });
        }

        self.load().await
    }
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl<B> LoadProjectsUseCase for ProjectStore<B>
where
    B: ProjectBackend,
{
    async fn execute(&self) -> Result<(), ProjectStoreError> {
        self.load().await
    }
}

#[async_trait]
impl<B> CreateProjectUseCase for ProjectStore<B>
where
    B: ProjectBackend,
{
    async fn execute(&self, draft: ProjectDraft) -> Result<(), ProjectStoreError> {
        self.create(draft).await
    }
}

#[async_trait]
impl<B> UpdateProjectUseCase for ProjectStore<B>
where
    B: ProjectBackend,
{
    async fn execute(&self, id: ProjectId, draft: ProjectDraft) -> Result<(), ProjectStoreError> {
        self.update(&id, draft).await
    }
}

#[async_trait]
impl<B> DeleteProjectUseCase for ProjectStore<B>
where
    B: ProjectBackend,
{
    async fn execute(&self, id: ProjectId) -> Result<(), ProjectStoreError> {
        self.delete(&id).await
    }
}

/// Keeps backend order; drops records the store may not hold.
fn retain_well_formed(projects: Vec<Project>) -> Vec<Project> {
    let mut seen = HashSet::new();

    projects
        .into_iter()
        .filter(|project| {
            if !project.is_well_formed() {
                warn!("Dropping project {} without title or link", project.id);
                return false;
            }
            if !seen.insert(project.id.clone()) {
                warn!("Dropping duplicate project {}", project.id);
                return false;
            }
            true
        })
        .collect()
}
