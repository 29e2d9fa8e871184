//! # foldertree-entity
//!
//! Domain entity models for FolderTree. Row structs derive `sqlx::FromRow`;
//! the assembled tree types are derived views that are never persisted.

pub mod file;
pub mod folder;

pub use file::{CreateFile, File};
pub use folder::{ChildFolderNode, CreateFolder, Folder, FolderNode};
