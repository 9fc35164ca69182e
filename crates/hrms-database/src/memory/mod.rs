//! In-process implementations of the storage traits.
//!
//! They hold everything in memory and can be switched into an unavailable
//! state to exercise failure paths.

pub mod activity_log;
pub mod actor;
pub mod archivable;

pub use activity_log::MemoryActivityLog;
pub use actor::MemoryActorDirectory;
pub use archivable::MemoryArchivableRepository;
