//! Folder management and tree services.

pub mod service;
pub mod tree;

pub use service::FolderService;
pub use tree::{FETCH_FAILED_MESSAGE, TreeService};
