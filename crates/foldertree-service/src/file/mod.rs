//! File management services.

pub mod service;

pub use service::FileService;
