//! Archive snapshot, statistics and restore result types.

use serde::{Deserialize, Serialize};

/// Archived records of one model, as listed in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedTable {
    /// Physical collection (table) name.
    pub collection_name: String,
    /// Number of archived records.
    pub count: u64,
    /// The archived records, newest first.
    pub records: Vec<serde_json::Value>,
}

/// Every model that currently holds archived records.
///
/// Models with zero archived records are omitted from `archives`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveSnapshot {
    /// Number of entries in `archives`.
    pub total_tables: usize,
    /// Sum of `count` across `archives`.
    pub total_records: u64,
    /// Archived records keyed by model name.
    pub archives: serde_json::Map<String, serde_json::Value>,
}

impl ArchiveSnapshot {
    /// Build a snapshot from per-model tables, skipping empty ones.
    pub fn from_tables(
        tables: impl IntoIterator<Item = (String, ArchivedTable)>,
    ) -> Result<Self, serde_json::Error> {
        let mut archives = serde_json::Map::new();
        let mut total_records = 0;
        for (model, table) in tables {
            if table.count == 0 {
                continue;
            }
            total_records += table.count;
            archives.insert(model, serde_json::to_value(table)?);
        }
        Ok(Self {
            total_tables: archives.len(),
            total_records,
            archives,
        })
    }
}

/// Archived/active counts for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveStat {
    /// Model name.
    pub model: String,
    /// Physical collection name.
    pub collection: String,
    /// Records with the archive flag set.
    pub archived: u64,
    /// Records without the archive flag.
    pub active: u64,
    /// `archived + active`.
    pub total: u64,
}

/// Restore outcome for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreDetail {
    /// Model name.
    pub model: String,
    /// Physical collection name.
    pub collection: String,
    /// Number of records whose flag was cleared.
    pub restored: u64,
}

/// Result of restoring every model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSummary {
    /// Sum of `restored` across `details`.
    pub total_restored: u64,
    /// Per-model outcomes, only for models that restored something.
    pub details: Vec<RestoreDetail>,
    /// Backup file written before restoring, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_path: Option<String>,
}

/// Archived records of a single model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelArchive {
    /// Model name.
    pub model: String,
    /// Number of archived records.
    pub count: u64,
    /// The archived records, newest first.
    pub records: Vec<serde_json::Value>,
}

/// Result of writing a full backup of every registered model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupReport {
    /// Path of the written backup file.
    pub path: String,
    /// Number of models included.
    pub models: usize,
    /// Number of records included.
    pub total_records: u64,
}
