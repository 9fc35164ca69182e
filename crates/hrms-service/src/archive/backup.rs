//! Backup artifact writer.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::info;

use hrms_core::error::{AppError, ErrorKind};
use hrms_core::result::AppResult;

/// Writes point-in-time JSON exports into a backup directory.
#[derive(Debug, Clone)]
pub struct BackupWriter {
    dir: PathBuf,
}

impl BackupWriter {
    /// Create a writer targeting `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The backup directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `{model: [records]}` to a new timestamped file and return its path.
    pub async fn write(&self, models: &Map<String, Value>) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create backup directory {}", self.dir.display()),
                e,
            )
        })?;

        let path = self.dir.join(file_name(&Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)));
        let body = serde_json::to_vec_pretty(models)?;
        tokio::fs::write(&path, body).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write backup {}", path.display()),
                e,
            )
        })?;

        info!(path = %path.display(), models = models.len(), "Backup written");
        Ok(path)
    }
}

/// `backup-<timestamp>.json` with `:` and `.` in the timestamp replaced by `-`.
fn file_name(timestamp: &str) -> String {
    format!("backup-{}.json", timestamp.replace([':', '.'], "-"))
}
