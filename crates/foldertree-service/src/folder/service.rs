//! Folder mutation handlers.

use std::sync::Arc;

use tracing::info;

use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;
use foldertree_database::StoreManager;
use foldertree_database::repositories::FolderStore;
use foldertree_entity::folder::{CreateFolder, Folder};

use crate::validation::normalize_name;

/// Creates, renames and deletes single folder rows.
///
/// Deleting a folder removes only that row. Child folders and files keep
/// their dangling parent reference and drop out of the tree view.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder store.
    folders: Arc<dyn FolderStore>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folders: Arc<dyn FolderStore>) -> Self {
        Self { folders }
    }

    /// Creates a folder service over the manager's folder store.
    pub fn from_manager(stores: &StoreManager) -> Self {
        Self::new(stores.folders())
    }

    /// Create a folder, as a root when `parent_folder_id` is `None`.
    ///
    /// A parent id that references no row is a store failure, not a
    /// not-found.
    pub async fn create_folder(
        &self,
        name: &str,
        parent_folder_id: Option<i64>,
    ) -> AppResult<Folder> {
        let name = normalize_name("Folder", name)?;
        let folder = self
            .folders
            .create(&CreateFolder {
                name,
                parent_folder_id,
            })
            .await?;

        info!(
            folder_id = folder.id,
            parent_folder_id = ?folder.parent_folder_id,
            "Folder created"
        );
        Ok(folder)
    }

    /// Rename a folder and touch its `updated_at`.
    pub async fn rename_folder(&self, id: i64, name: &str) -> AppResult<Folder> {
        let name = normalize_name("Folder", name)?;
        let folder = self.folders.rename(id, &name).await?;

        info!(folder_id = id, "Folder renamed");
        Ok(folder)
    }

    /// Delete exactly one folder row.
    pub async fn delete_folder(&self, id: i64) -> AppResult<()> {
        if !self.folders.delete(&id).await? {
            return Err(AppError::not_found(format!("Folder {id} not found")));
        }

        info!(folder_id = id, "Folder deleted");
        Ok(())
    }
}
