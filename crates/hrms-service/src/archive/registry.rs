//! Registry of archivable models.

use std::sync::{Arc, RwLock};

use tracing::debug;

use hrms_core::error::AppError;
use hrms_core::result::AppResult;
use hrms_core::traits::ArchivableRepository;
use hrms_core::types::ModelDescriptor;

/// The set of archivable models known to this process.
///
/// Resources register their repository at startup. Lookups see every
/// registration completed before the call.
#[derive(Default)]
pub struct ModelRegistry {
    repositories: RwLock<Vec<Arc<dyn ArchivableRepository>>>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.list_archivable_models())
            .finish()
    }
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model. Its name and collection must not already be taken.
    pub fn register(&self, repository: Arc<dyn ArchivableRepository>) -> AppResult<()> {
        let descriptor = *repository.descriptor();
        let mut repositories = self
            .repositories
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let taken = repositories.iter().any(|r| {
            let existing = r.descriptor();
            existing.name.eq_ignore_ascii_case(descriptor.name)
                || existing.collection == descriptor.collection
        });
        if taken {
            return Err(AppError::conflict(format!(
                "Model '{}' is already registered",
                descriptor.name
            )));
        }

        debug!(model = descriptor.name, collection = descriptor.collection, "Registered archivable model");
        repositories.push(repository);
        Ok(())
    }

    /// Descriptors of every registered model, in registration order.
    pub fn list_archivable_models(&self) -> Vec<ModelDescriptor> {
        self.repositories()
            .iter()
            .map(|r| *r.descriptor())
            .collect()
    }

    /// Repositories of every registered model, in registration order.
    pub fn repositories(&self) -> Vec<Arc<dyn ArchivableRepository>> {
        self.repositories
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Find a model by name (any case) or collection.
    pub fn resolve(&self, key: &str) -> AppResult<Arc<dyn ArchivableRepository>> {
        self.repositories
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .find(|r| r.descriptor().matches(key))
            .cloned()
            .ok_or_else(|| AppError::model_not_found(key))
    }
}
