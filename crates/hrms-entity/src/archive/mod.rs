//! Wire shapes produced by the archive administration endpoints.

pub mod snapshot;

pub use snapshot::{
    ArchiveSnapshot, ArchiveStat, ArchivedTable, BackupReport, ModelArchive, RestoreDetail,
    RestoreSummary,
};
