//! Shared application state passed to every handler.

use std::sync::Arc;

use foldertree_core::config::AppConfig;
use foldertree_database::StoreManager;
use foldertree_service::{FileService, FolderService, TreeService};

/// Central application state. Cloned per request; every field is cheap to
/// clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Store handle shared by all services.
    pub store: StoreManager,
    /// Tree assembly.
    pub tree_service: Arc<TreeService>,
    /// Folder mutations.
    pub folder_service: Arc<FolderService>,
    /// File mutations.
    pub file_service: Arc<FileService>,
}

impl AppState {
    /// Wire the services over `store`.
    pub fn new(config: AppConfig, store: StoreManager) -> Self {
        Self {
            config: Arc::new(config),
            tree_service: Arc::new(TreeService::from_manager(&store)),
            folder_service: Arc::new(FolderService::from_manager(&store)),
            file_service: Arc::new(FileService::from_manager(&store)),
            store,
        }
    }
}
