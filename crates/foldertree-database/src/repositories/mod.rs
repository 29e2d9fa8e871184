//! Store traits and their PostgreSQL implementations.
//!
//! Every listing query returns rows ascending by `id`. Inserts fail when the
//! referenced folder is missing; deletes never cascade.

pub mod file;
pub mod folder;

use std::fmt;

use async_trait::async_trait;

use foldertree_core::result::AppResult;
use foldertree_core::traits::Repository;
use foldertree_entity::file::{CreateFile, File};
use foldertree_entity::folder::{CreateFolder, Folder};

pub use file::FileRepository;
pub use folder::FolderRepository;

/// Queries and single-row mutations over the `folders` table.
#[async_trait]
pub trait FolderStore: Repository<Folder, i64> + fmt::Debug {
    /// Folders with no parent.
    async fn find_roots(&self) -> AppResult<Vec<Folder>>;

    /// Folders whose parent is `parent_id`.
    async fn find_children(&self, parent_id: i64) -> AppResult<Vec<Folder>>;

    /// Insert a folder and return the stored row.
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Rename a folder. Fails with `NotFound` when no row matches.
    async fn rename(&self, id: i64, name: &str) -> AppResult<Folder>;
}

/// Queries and single-row mutations over the `files` table.
#[async_trait]
pub trait FileStore: Repository<File, i64> + fmt::Debug {
    /// Files owned by `folder_id`.
    async fn find_by_folder(&self, folder_id: i64) -> AppResult<Vec<File>>;

    /// Insert a file and return the stored row.
    async fn create(&self, data: &CreateFile) -> AppResult<File>;

    /// Rename a file. Fails with `NotFound` when no row matches.
    async fn rename(&self, id: i64, name: &str) -> AppResult<File>;
}
