//! Descriptors for archivable data models.

use serde::Serialize;

/// Describes one archivable model: what it is called, where its records
/// live, and which boolean column marks a record as archived.
///
/// Descriptors are `const`-constructible so each resource can declare its
/// own next to its entity definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ModelDescriptor {
    /// Model name as shown to administrators (e.g. `"Department"`).
    pub name: &'static str,
    /// Storage location of the records (table name, e.g. `"departments"`).
    pub collection: &'static str,
    /// Soft-delete flag column (e.g. `"is_archived"`, `"archive_department"`).
    pub flag_field: &'static str,
}

impl ModelDescriptor {
    /// Create a descriptor.
    pub const fn new(
        name: &'static str,
        collection: &'static str,
        flag_field: &'static str,
    ) -> Self {
        Self {
            name,
            collection,
            flag_field,
        }
    }

    /// Whether `key` names this model, by model name or by collection.
    ///
    /// Model names compare case-insensitively; collections must match exactly.
    pub fn matches(&self, key: &str) -> bool {
        self.name.eq_ignore_ascii_case(key) || self.collection == key
    }
}
