//! In-memory store with the same contract as the PostgreSQL repositories.
//!
//! Rows live in ordered maps keyed by id, so listings come back ascending by
//! id. Inserts check that the referenced folder exists; deletes remove a
//! single row and leave dependents orphaned.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;
use foldertree_core::traits::Repository;
use foldertree_entity::file::{CreateFile, File};
use foldertree_entity::folder::{CreateFolder, Folder};

use crate::repositories::{FileStore, FolderStore};

#[derive(Debug, Default)]
struct Tables {
    folders: BTreeMap<i64, Folder>,
    files: BTreeMap<i64, File>,
    last_folder_id: i64,
    last_file_id: i64,
}

/// Shared in-memory tables.
///
/// Cloning is cheap; every clone and every repository handed out by
/// [`MemoryStore::folders`] and [`MemoryStore::files`] sees the same rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folder repository over these tables.
    pub fn folders(&self) -> MemoryFolderRepository {
        MemoryFolderRepository {
            tables: Arc::clone(&self.tables),
        }
    }

    /// File repository over these tables.
    pub fn files(&self) -> MemoryFileRepository {
        MemoryFileRepository {
            tables: Arc::clone(&self.tables),
        }
    }
}

/// [`FolderStore`] backed by [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryFolderRepository {
    tables: Arc<RwLock<Tables>>,
}

/// [`FileStore`] backed by [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryFileRepository {
    tables: Arc<RwLock<Tables>>,
}

#[async_trait]
impl Repository<Folder, i64> for MemoryFolderRepository {
    async fn find_by_id(&self, id: &i64) -> AppResult<Option<Folder>> {
        Ok(self.tables.read().await.folders.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        Ok(self.tables.read().await.folders.values().cloned().collect())
    }

    async fn delete(&self, id: &i64) -> AppResult<bool> {
        Ok(self.tables.write().await.folders.remove(id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.tables.read().await.folders.len() as u64)
    }
}

#[async_trait]
impl FolderStore for MemoryFolderRepository {
    async fn find_roots(&self) -> AppResult<Vec<Folder>> {
        let tables = self.tables.read().await;
        Ok(tables
            .folders
            .values()
            .filter(|f| f.is_root())
            .cloned()
            .collect())
    }

    async fn find_children(&self, parent_id: i64) -> AppResult<Vec<Folder>> {
        let tables = self.tables.read().await;
        Ok(tables
            .folders
            .values()
            .filter(|f| f.parent_folder_id == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let mut tables = self.tables.write().await;

        if let Some(parent) = data.parent_folder_id {
            if !tables.folders.contains_key(&parent) {
                return Err(AppError::database(format!(
                    "Parent folder {parent} does not exist"
                )));
            }
        }

        tables.last_folder_id += 1;
        let now = Utc::now();
        let folder = Folder {
            id: tables.last_folder_id,
            name: data.name.clone(),
            parent_folder_id: data.parent_folder_id,
            created_at: now,
            updated_at: now,
        };
        tables.folders.insert(folder.id, folder.clone());

        debug!(folder_id = folder.id, "Inserted folder into memory store");
        Ok(folder)
    }

    async fn rename(&self, id: i64, name: &str) -> AppResult<Folder> {
        let mut tables = self.tables.write().await;
        let folder = tables
            .folders
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))?;
        folder.name = name.to_string();
        folder.updated_at = Utc::now();
        Ok(folder.clone())
    }
}

#[async_trait]
impl Repository<File, i64> for MemoryFileRepository {
    async fn find_by_id(&self, id: &i64) -> AppResult<Option<File>> {
        Ok(self.tables.read().await.files.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<File>> {
        Ok(self.tables.read().await.files.values().cloned().collect())
    }

    async fn delete(&self, id: &i64) -> AppResult<bool> {
        Ok(self.tables.write().await.files.remove(id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.tables.read().await.files.len() as u64)
    }
}

#[async_trait]
impl FileStore for MemoryFileRepository {
    async fn find_by_folder(&self, folder_id: i64) -> AppResult<Vec<File>> {
        let tables = self.tables.read().await;
        Ok(tables
            .files
            .values()
            .filter(|f| f.folder_id == folder_id)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateFile) -> AppResult<File> {
        let mut tables = self.tables.write().await;

        if !tables.folders.contains_key(&data.folder_id) {
            return Err(AppError::database(format!(
                "Folder {} does not exist",
                data.folder_id
            )));
        }

        tables.last_file_id += 1;
        let now = Utc::now();
        let file = File {
            id: tables.last_file_id,
            name: data.name.clone(),
            folder_id: data.folder_id,
            created_at: now,
            updated_at: now,
        };
        tables.files.insert(file.id, file.clone());

        debug!(file_id = file.id, "Inserted file into memory store");
        Ok(file)
    }

    async fn rename(&self, id: i64, name: &str) -> AppResult<File> {
        let mut tables = self.tables.write().await;
        let file = tables
            .files
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))?;
        file.name = name.to_string();
        file.updated_at = Utc::now();
        Ok(file.clone())
    }
}
