//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use foldertree_core::config::{DatabaseConfig, StoreProvider};
use foldertree_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::repositories::{FileRepository, FileStore, FolderRepository, FolderStore};

/// Owns the store handle for the lifetime of the process.
///
/// The provider is selected at construction time. Repositories handed out
/// by [`StoreManager::folders`] and [`StoreManager::files`] share the same
/// pool (or the same in-memory tables).
#[derive(Debug, Clone)]
pub struct StoreManager {
    folders: Arc<dyn FolderStore>,
    files: Arc<dyn FileStore>,
    pool: Option<DatabasePool>,
}

impl StoreManager {
    /// Create a store manager from configuration.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL store");
                let pool = DatabasePool::connect(config).await?;
                Ok(Self::postgres(pool))
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory store");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// A manager over PostgreSQL repositories sharing `pool`.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            folders: Arc::new(FolderRepository::new(pool.pool().clone())),
            files: Arc::new(FileRepository::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// A manager over in-memory tables.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            folders: Arc::new(store.folders()),
            files: Arc::new(store.files()),
            pool: None,
        }
    }

    /// Create a manager from existing stores (for testing).
    pub fn from_stores(folders: Arc<dyn FolderStore>, files: Arc<dyn FileStore>) -> Self {
        Self {
            folders,
            files,
            pool: None,
        }
    }

    /// Folder store handle.
    pub fn folders(&self) -> Arc<dyn FolderStore> {
        Arc::clone(&self.folders)
    }

    /// File store handle.
    pub fn files(&self) -> Arc<dyn FileStore> {
        Arc::clone(&self.files)
    }

    /// The PostgreSQL pool, when that provider is active.
    pub fn pool(&self) -> Option<&DatabasePool> {
        self.pool.as_ref()
    }

    /// Short provider name for logs and health output.
    pub fn provider_name(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }

    /// Check store connectivity.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release the store. Safe to call more than once.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
