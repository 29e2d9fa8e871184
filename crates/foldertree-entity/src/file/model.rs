//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `files` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier, generated on insert.
    pub id: i64,
    /// The file name (including extension).
    pub name: String,
    /// The folder containing this file.
    pub folder_id: i64,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last renamed.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    /// The file name.
    pub name: String,
    /// The folder to place the file in.
    pub folder_id: i64,
}

impl CreateFile {
    /// A file named `name` inside `folder_id`.
    pub fn new(name: impl Into<String>, folder_id: i64) -> Self {
        Self {
            name: name.into(),
            folder_id,
        }
    }
}
