//! # foldertree-service
//!
//! Business logic for FolderTree. The [`TreeService`] assembles the
//! two-level folder/file view; [`FolderService`] and [`FileService`] are the
//! single-row mutation handlers.
//!
//! Services follow constructor injection: store handles are provided at
//! construction time via `Arc` references.

pub mod file;
pub mod folder;
pub mod validation;

pub use file::FileService;
pub use folder::{FolderService, TreeService};
