//! Storage seams defined in `hrms-core` and implemented by `hrms-database`.

pub mod activity;
pub mod archive;

pub use activity::{ActivityLogStore, ActorDirectory};
pub use archive::ArchivableRepository;
