//! Archive administration configuration.

use serde::{Deserialize, Serialize};

/// Settings for the archive/restore subsystem and its backups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Directory that receives backup artifacts.
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,
    /// Write a full backup before every restore-all sweep.
    #[serde(default = "default_backup_before_restore")]
    pub backup_before_restore: bool,
    /// Upper bound, in seconds, on waiting for pending audit writes at shutdown.
    #[serde(default = "default_audit_drain_timeout")]
    pub audit_drain_timeout_seconds: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            backup_dir: default_backup_dir(),
            backup_before_restore: default_backup_before_restore(),
            audit_drain_timeout_seconds: default_audit_drain_timeout(),
        }
    }
}

fn default_backup_dir() -> String {
    "data/backups".to_string()
}

fn default_backup_before_restore() -> bool {
    true
}

fn default_audit_drain_timeout() -> u64 {
    10
}
