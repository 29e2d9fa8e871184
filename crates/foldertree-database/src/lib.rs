//! # foldertree-database
//!
//! PostgreSQL connection management, migrations, the folder/file store
//! traits, and their PostgreSQL and in-memory implementations.

pub mod connection;
pub mod manager;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use manager::StoreManager;
pub use memory::MemoryStore;
pub use repositories::{FileRepository, FileStore, FolderRepository, FolderStore};
