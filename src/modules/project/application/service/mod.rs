pub mod editing_session;
pub mod project_store;

pub use editing_session::{Dialog, EditingSession, EditingSessionError, Submission};
pub use project_store::{ProjectStore, ProjectStoreError, StoreSnapshot};
