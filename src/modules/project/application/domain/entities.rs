use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// ProjectId
// ──────────────────────────────────────────────────────────
//

/// Backend-assigned identifier. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Category
// ──────────────────────────────────────────────────────────
// Known names are matched case-insensitively; anything else is kept
// as trimmed free text.
//

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Web,
    Mobile,
    Desktop,
    Backend,
    Library,
    Tool,
    Other(String),
}

impl Category {
    const KNOWN: [Category; 6] = [
        Category::Web,
        Category::Mobile,
        Category::Desktop,
        Category::Backend,
        Category::Library,
        Category::Tool,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Desktop => "desktop",
            Category::Backend => "backend",
            Category::Library => "library",
            Category::Tool => "tool",
            Category::Other(text) => text,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        let name = value.trim();
        Category::KNOWN
            .into_iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| Category::Other(name.to_string()))
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProjectRecord")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
}

/// Wire shape of a listed record. Backends may send the key as `id`, as
/// `_id`, or as both; `id` wins. Missing text fields decode as empty so the
/// store can drop the record instead of failing the whole list.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRecord {
    #[serde(default)]
    id: Option<ProjectId>,
    #[serde(default, rename = "_id")]
    document_id: Option<ProjectId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<Category>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record has neither `id` nor `_id`")]
    MissingId,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = RecordError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .or(record.document_id)
            .ok_or(RecordError::MissingId)?;

        Ok(Self {
            id,
            title: record.title.unwrap_or_default(),
            link: record.link.unwrap_or_default(),
            description: record.description,
            category: record.category,
            created_at: record.created_at,
        })
    }
}

impl Project {
    /// A project may only live in the store with a non-blank title and link.
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty() && !self.link.trim().is_empty()
    }
}

//
// ──────────────────────────────────────────────────────────
// ProjectDraft
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("title must not be empty")]
    MissingTitle,

    #[error("link must not be empty")]
    MissingLink,
}

/// Uncommitted field set behind the add and edit dialogs.
///
/// `created_at` is only ever copied from the project being edited and has no
/// setter, so an update payload always carries the original timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Pre-fills every editable field and carries the immutable timestamp.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            link: project.link.clone(),
            description: project.description.clone(),
            category: project.category.clone(),
            created_at: Some(project.created_at),
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// The only validation performed: trimmed title and link are non-empty.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.link.trim().is_empty() {
            return Err(DraftError::MissingLink);
        }
        Ok(())
    }

    /// Validates, then trims title and link and drops blank optional fields.
    pub fn normalized(self) -> Result<Self, DraftError> {
        self.validate()?;

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let category = self
            .category
            .map(|c| Category::from(c.as_str()))
            .filter(|c| !c.as_str().is_empty());

        Ok(Self {
            title: self.title.trim().to_string(),
            link: self.link.trim().to_string(),
            description,
            category,
            created_at: self.created_at,
        })
    }
}
