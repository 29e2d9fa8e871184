//! Assembled folder tree for the two-level listing.
//!
//! Only roots carry `children`; a child node carries its files and nothing
//! deeper. Folders nested below a child are never represented.

use serde::{Deserialize, Serialize};

use super::model::Folder;
use crate::file::model::File;

/// A root folder with its direct children and files.
///
/// Serializes as the folder's own fields plus `children` and `files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// The root folder row.
    #[serde(flatten)]
    pub folder: Folder,
    /// Folders whose parent is this root, ascending by id.
    pub children: Vec<ChildFolderNode>,
    /// Files owned directly by this root, ascending by id.
    pub files: Vec<File>,
}

/// A folder one level below a root, with its files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildFolderNode {
    /// The child folder row.
    #[serde(flatten)]
    pub folder: Folder,
    /// Files owned by this child, ascending by id.
    pub files: Vec<File>,
}

impl FolderNode {
    /// Create a root node.
    pub fn new(folder: Folder, children: Vec<ChildFolderNode>, files: Vec<File>) -> Self {
        Self {
            folder,
            children,
            files,
        }
    }

    /// Number of folders in this subtree, including the root.
    pub fn folder_count(&self) -> usize {
        1 + self.children.len()
    }

    /// Number of files in this subtree.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.children.iter().map(|c| c.files.len()).sum::<usize>()
    }
}

impl ChildFolderNode {
    /// Create a child node.
    pub fn new(folder: Folder, files: Vec<File>) -> Self {
        Self { folder, files }
    }
}
