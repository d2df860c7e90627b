use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectDraft, ProjectId};
use crate::modules::project::application::ports::outgoing::project_backend::{
    ProjectBackend, ProjectBackendError,
};
use crate::tests::support::project_test_fixtures::timestamp;

/// In-memory backend. Assigns sequential numeric ids, keeps insertion
/// order, and records what it was asked to do.
#[derive(Clone)]
pub struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    projects: Vec<Project>,
    next_id: u64,
    list_calls: usize,
    write_calls: usize,
    last_update: Option<(ProjectId, ProjectDraft)>,
    fail_next_list: Option<ProjectBackendError>,
    fail_next_write: Option<ProjectBackendError>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::with_projects(Vec::new())
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        let highest = projects
            .iter()
            .filter_map(|p| p.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            inner: Arc::new(Mutex::new(Inner {
                projects,
                next_id: highest + 1,
                ..Inner::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    pub fn stored(&self) -> Vec<Project> {
        self.lock().projects.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.lock().list_calls
    }

    pub fn write_calls(&self) -> usize {
        self.lock().write_calls
    }

    pub fn last_update(&self) -> Option<(ProjectId, ProjectDraft)> {
        self.lock().last_update.clone()
    }

    pub fn fail_next_list(&self, err: ProjectBackendError) {
        self.lock().fail_next_list = Some(err);
    }

    pub fn fail_next_write(&self, err: ProjectBackendError) {
        self.lock().fail_next_write = Some(err);
    }

    pub fn insert(&self, draft: ProjectDraft) -> Project {
        let mut inner = self.lock();
        let id = ProjectId::from(inner.next_id.to_string());
        inner.next_id += 1;

        let project = Project {
            id,
            title: draft.title,
            link: draft.link,
            description: draft.description,
            category: draft.category,
            created_at: timestamp(2024),
        };
        inner.projects.push(project.clone());
        project
    }

    /// Full replacement, as a PUT would do. A `createdAt` in the body wins.
    pub fn replace(&self, id: &ProjectId, draft: ProjectDraft) -> Option<Project> {
        let mut inner = self.lock();
        inner.last_update = Some((id.clone(), draft.clone()));

        let existing = inner.projects.iter_mut().find(|p| &p.id == id)?;
        existing.created_at = draft.created_at().unwrap_or(existing.created_at);
        existing.title = draft.title;
        existing.link = draft.link;
        existing.description = draft.description;
        existing.category = draft.category;
        Some(existing.clone())
    }

    pub fn remove(&self, id: &ProjectId) -> bool {
        let mut inner = self.lock();
        let before = inner.projects.len();
        inner.projects.retain(|p| &p.id != id);
        inner.projects.len() != before
    }

    fn begin_write(&self) -> Result<(), ProjectBackendError> {
        let mut inner = self.lock();
        inner.write_calls += 1;
        match inner.fail_next_write.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn not_found(id: &ProjectId) -> ProjectBackendError {
    ProjectBackendError::Status {
        status: 404,
        message: format!("project {} not found", id),
    }
}

#[async_trait]
impl ProjectBackend for FakeBackend {
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectBackendError> {
        let mut inner = self.lock();
        inner.list_calls += 1;
        if let Some(err) = inner.fail_next_list.take() {
            return Err(err);
        }
        Ok(inner.projects.clone())
    }

    async fn create_project(&self, draft: ProjectDraft) -> Result<(), ProjectBackendError> {
        self.begin_write()?;
        self.insert(draft);
        Ok(())
    }

    async fn update_project(
        &self,
        id: ProjectId,
        draft: ProjectDraft,
    ) -> Result<(), ProjectBackendError> {
        self.begin_write()?;
        self.replace(&id, draft)
            .map(|_| ())
            .ok_or_else(|| not_found(&id))
    }

    async fn delete_project(&self, id: ProjectId) -> Result<(), ProjectBackendError> {
        self.begin_write()?;
        if self.remove(&id) {
            Ok(())
        } else {
            Err(not_found(&id))
        }
    }
}
