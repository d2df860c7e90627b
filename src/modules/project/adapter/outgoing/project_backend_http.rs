// src/modules/project/adapter/outgoing/project_backend_http.rs

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::modules::project::adapter::outgoing::api_config::ApiConfig;
use crate::modules::project::application::domain::entities::{Project, ProjectDraft, ProjectId};
use crate::modules::project::application::ports::outgoing::project_backend::{
    ProjectBackend, ProjectBackendError,
};

/// REST client for the `/projects` resource.
#[derive(Debug, Clone)]
pub struct HttpProjectBackend {
    client: Client,
    base_url: Url,
}

impl HttpProjectBackend {
    pub fn new(config: &ApiConfig) -> Result<Self, ProjectBackendError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ProjectBackendError::Transport(e.to_string()))?;

        Self::with_client(client, &config.base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ProjectBackendError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ProjectBackendError::Transport(format!("invalid base url: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ProjectBackendError::Transport(format!(
                "invalid base url: {}",
                base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Appends path segments to the base; each segment is percent-encoded,
    /// so reserved characters in an id stay inside its own segment.
    fn resource_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn projects_url(&self) -> Url {
        self.resource_url(&["projects"])
    }

    fn project_url(&self, id: &ProjectId) -> Url {
        self.resource_url(&["projects", id.as_str()])
    }
}

/// Converts listed records one by one, so a record that does not decode is
/// dropped with a warning instead of failing the whole list.
fn decode_projects(records: Vec<Value>) -> Vec<Project> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Project>(record) {
            Ok(project) => Some(project),
            Err(e) => {
                warn!("Dropping undecodable project record #{}: {}", index, e);
                None
            }
        })
        .collect()
}

/// Turns a non-2xx response into a status error, keeping the body text.
async fn ensure_success(response: Response) -> Result<Response, ProjectBackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ProjectBackendError::Status {
        status: status.as_u16(),
        message,
    })
}

fn transport(e: reqwest::Error) -> ProjectBackendError {
    ProjectBackendError::Transport(e.to_string())
}

#[async_trait]
impl ProjectBackend for HttpProjectBackend {
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectBackendError> {
        let url = self.projects_url();
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(transport)?;
        let records = ensure_success(response)
            .await?
            .json::<Vec<Value>>()
            .await
            .map_err(|e| ProjectBackendError::Decode(e.to_string()))?;

        Ok(decode_projects(records))
    }

    async fn create_project(&self, draft: ProjectDraft) -> Result<(), ProjectBackendError> {
        let url = self.projects_url();
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&draft)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update_project(
        &self,
        id: ProjectId,
        draft: ProjectDraft,
    ) -> Result<(), ProjectBackendError> {
        let url = self.project_url(&id);
        debug!("PUT {}", url);

        let response = self
            .client
            .put(url)
            .json(&draft)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete_project(&self, id: ProjectId) -> Result<(), ProjectBackendError> {
        let url = self.project_url(&id);
        debug!("DELETE {}", url);

        let response = self.client.delete(url).send().await.map_err(transport)?;
        ensure_success(response).await?;
        Ok(())
    }
}
