use tracing::{debug, warn};

use crate::modules::project::application::domain::entities::{
    Category, DraftError, Project, ProjectDraft, ProjectId,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, ProjectStoreError, UpdateProjectUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditingSessionError {
    #[error("a project dialog is already open")]
    DialogAlreadyOpen,

    #[error("no project dialog is open")]
    NoDialogOpen,

    #[error("invalid project: {0}")]
    InvalidDraft(#[from] DraftError),

    #[error(transparent)]
    Store(#[from] ProjectStoreError),
}

//
// ──────────────────────────────────────────────────────────
// Dialog state
// ──────────────────────────────────────────────────────────
//

/// Which dialog is showing, without the form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Closed,
    AddOpen,
    EditOpen(ProjectId),
}

#[derive(Debug, Clone, Default)]
enum SessionState {
    #[default]
    Closed,
    Adding(ProjectDraft),
    Editing {
        target: ProjectId,
        draft: ProjectDraft,
    },
}

/// A validated, normalized write taken out of a dialog that has already
/// closed. Dispatching it is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(ProjectDraft),
    Update { id: ProjectId, draft: ProjectDraft },
}

impl Submission {
    pub async fn dispatch<S>(self, store: &S) -> Result<(), ProjectStoreError>
    where
        S: CreateProjectUseCase + UpdateProjectUseCase + ?Sized,
    {
        match self {
            Submission::Create(draft) => CreateProjectUseCase::execute(store, draft).await,
            Submission::Update { id, draft } => {
                UpdateProjectUseCase::execute(store, id, draft).await
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Session
// ──────────────────────────────────────────────────────────
//

/// Add/edit dialog state machine. Never touches the store's list; a submit
/// only produces a [`Submission`] for the store to run.
#[derive(Debug, Clone, Default)]
pub struct EditingSession {
    state: SessionState,
}

impl EditingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialog(&self) -> Dialog {
        match &self.state {
            SessionState::Closed => Dialog::Closed,
            SessionState::Adding(_) => Dialog::AddOpen,
            SessionState::Editing { target, .. } => Dialog::EditOpen(target.clone()),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, SessionState::Closed)
    }

    pub fn draft(&self) -> Option<&ProjectDraft> {
        match &self.state {
            SessionState::Closed => None,
            SessionState::Adding(draft) | SessionState::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn open_add(&mut self) -> Result<(), EditingSessionError> {
        self.ensure_closed()?;
        debug!("Opening add project dialog");
        self.state = SessionState::Adding(ProjectDraft::default());
        Ok(())
    }

    pub fn open_edit(&mut self, project: &Project) -> Result<(), EditingSessionError> {
        self.ensure_closed()?;
        debug!("Opening edit dialog for project {}", project.id);
        self.state = SessionState::Editing {
            target: project.id.clone(),
            draft: ProjectDraft::from_project(project),
        };
        Ok(())
    }

    /// Closes whatever is open and discards the draft.
    pub fn cancel(&mut self) {
        self.state = SessionState::Closed;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.title = title.into();
        }
    }

    pub fn set_link(&mut self, link: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.link = link.into();
        }
    }

    pub fn set_description(&mut self, description: Option<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.description = description;
        }
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        if let Some(draft) = self.draft_mut() {
            draft.category = category;
        }
    }

    /// Validates the open draft and, if it passes, closes the dialog and
    /// hands back the write to perform. On a validation failure nothing
    /// changes and the dialog stays open.
    pub fn submit(&mut self) -> Result<Submission, EditingSessionError> {
        let draft = self.draft().ok_or(EditingSessionError::NoDialogOpen)?;

        if let Err(e) = draft.validate() {
            warn!("Rejected project submit: {}", e);
            return Err(e.into());
        }

        let submission = match std::mem::take(&mut self.state) {
            SessionState::Closed => return Err(EditingSessionError::NoDialogOpen),
            SessionState::Adding(draft) => Submission::Create(draft.normalized()?),
            SessionState::Editing { target, draft } => Submission::Update {
                id: target,
                draft: draft.normalized()?,
            },
        };

        Ok(submission)
    }

    /// Submits and immediately dispatches to the store. The dialog is
    /// already closed when the backend call starts.
    pub async fn submit_to<S>(&mut self, store: &S) -> Result<(), EditingSessionError>
    where
        S: CreateProjectUseCase + UpdateProjectUseCase + ?Sized,
    {
        let submission = self.submit()?;
        submission.dispatch(store).await?;
        Ok(())
    }

    fn ensure_closed(&self) -> Result<(), EditingSessionError> {
        if self.is_open() {
            warn!("Ignoring open request while {:?} is showing", self.dialog());
            return Err(EditingSessionError::DialogAlreadyOpen);
        }
        Ok(())
    }

    fn draft_mut(&mut self) -> Option<&mut ProjectDraft> {
        match &mut self.state {
            SessionState::Closed => None,
            SessionState::Adding(draft) | SessionState::Editing { draft, .. } => Some(draft),
        }
    }
}
