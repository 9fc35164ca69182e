//! Archive administration: model registry, cross-model operations and backups.

pub mod backup;
pub mod registry;
pub mod service;

pub use backup::BackupWriter;
pub use registry::ModelRegistry;
pub use service::ArchiveService;
