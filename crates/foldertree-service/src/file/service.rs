//! File mutation handlers.

use std::sync::Arc;

use tracing::info;

use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;
use foldertree_database::StoreManager;
use foldertree_database::repositories::FileStore;
use foldertree_entity::file::{CreateFile, File};

use crate::validation::normalize_name;

/// Creates, renames and deletes single file rows.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File store.
    files: Arc<dyn FileStore>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(files: Arc<dyn FileStore>) -> Self {
        Self { files }
    }

    /// Creates a file service over the manager's file store.
    pub fn from_manager(stores: &StoreManager) -> Self {
        Self::new(stores.files())
    }

    /// Create a file in `folder_id`. The folder must exist at insert time.
    pub async fn create_file(&self, name: &str, folder_id: i64) -> AppResult<File> {
        let name = normalize_name("File", name)?;
        let file = self.files.create(&CreateFile { name, folder_id }).await?;

        info!(file_id = file.id, folder_id, "File created");
        Ok(file)
    }

    /// Rename a file and touch its `updated_at`. The folder is unchanged.
    pub async fn rename_file(&self, id: i64, name: &str) -> AppResult<File> {
        let name = normalize_name("File", name)?;
        let file = self.files.rename(id, &name).await?;

        info!(file_id = id, "File renamed");
        Ok(file)
    }

    /// Delete exactly one file row.
    pub async fn delete_file(&self, id: i64) -> AppResult<()> {
        if !self.files.delete(&id).await? {
            return Err(AppError::not_found(format!("File {id} not found")));
        }

        info!(file_id = id, "File deleted");
        Ok(())
    }
}
