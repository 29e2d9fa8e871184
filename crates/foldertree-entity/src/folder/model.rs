//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `folders` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier, generated on insert.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for root folders).
    pub parent_folder_id: Option<i64>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last renamed.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_folder_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder (None for a root).
    pub parent_folder_id: Option<i64>,
}

impl CreateFolder {
    /// A root folder named `name`.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_folder_id: None,
        }
    }

    /// A folder named `name` under `parent_id`.
    pub fn child(name: impl Into<String>, parent_id: i64) -> Self {
        Self {
            name: name.into(),
            parent_folder_id: Some(parent_id),
        }
    }
}
