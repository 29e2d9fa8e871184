//! Core traits defined in `foldertree-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
