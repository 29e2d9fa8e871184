//! Two-level folder tree assembly.
//!
//! Roots are listed first; for each root its child folders and its own
//! files are fetched, then the files of every child. Nothing below a child
//! is fetched. The reads are independent round-trips with no transaction
//! around them, so a concurrent mutation can produce a torn view (for
//! example a root deleted after it was listed still shows up with its
//! children). Such views are returned as-is.

use std::sync::Arc;
use std::time::Instant;

use futures::future::try_join_all;
use tracing::{debug, error};

use foldertree_core::error::{AppError, ErrorKind};
use foldertree_core::result::AppResult;
use foldertree_database::StoreManager;
use foldertree_database::repositories::{FileStore, FolderStore};
use foldertree_entity::folder::{ChildFolderNode, Folder, FolderNode};

/// Message of the single error surfaced when any tree query fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch folders";

/// Builds the nested root → child → file view.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Folder store.
    folders: Arc<dyn FolderStore>,
    /// File store.
    files: Arc<dyn FileStore>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(folders: Arc<dyn FolderStore>, files: Arc<dyn FileStore>) -> Self {
        Self { folders, files }
    }

    /// Creates a tree service over the manager's stores.
    pub fn from_manager(stores: &StoreManager) -> Self {
        Self::new(stores.folders(), stores.files())
    }

    /// Fetch every root folder with its children and files.
    ///
    /// Roots, children and files are each ascending by id. Any failed query
    /// aborts the whole assembly; no partial tree is returned.
    pub async fn fetch_tree(&self) -> AppResult<Vec<FolderNode>> {
        let started = Instant::now();

        match self.assemble().await {
            Ok(tree) => {
                debug!(
                    roots = tree.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Folder tree assembled"
                );
                Ok(tree)
            }
            Err(e) => {
                error!(error = %e, "Folder tree assembly failed");
                Err(AppError::with_source(
                    ErrorKind::Database,
                    FETCH_FAILED_MESSAGE,
                    e,
                ))
            }
        }
    }

    async fn assemble(&self) -> AppResult<Vec<FolderNode>> {
        let roots = self.folders.find_roots().await?;
        try_join_all(roots.into_iter().map(|root| self.assemble_root(root))).await
    }

    async fn assemble_root(&self, root: Folder) -> AppResult<FolderNode> {
        let (children, files) = futures::try_join!(
            self.folders.find_children(root.id),
            self.files.find_by_folder(root.id),
        )?;

        let children =
            try_join_all(children.into_iter().map(|child| self.assemble_child(child))).await?;

        Ok(FolderNode::new(root, children, files))
    }

    async fn assemble_child(&self, child: Folder) -> AppResult<ChildFolderNode> {
        let files = self.files.find_by_folder(child.id).await?;
        Ok(ChildFolderNode::new(child, files))
    }
}
