//! Response DTOs.

use serde::{Deserialize, Serialize};

use hrms_core::types::ModelDescriptor;
use hrms_entity::archive::ArchiveStat;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Create a successful response with a message.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Success envelope whose fields sit next to `success` instead of under `data`.
///
/// Used by the archive endpoints, e.g. `{success, totalTables, totalRecords, archives}`.
#[derive(Debug, Clone, Serialize)]
pub struct FlatResponse<T: Serialize> {
    /// Always `true`.
    pub success: bool,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Fields merged into the top-level object.
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> FlatResponse<T> {
    /// Create a successful flat response.
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            message: None,
            body,
        }
    }

    /// Create a successful flat response with a message.
    pub fn with_message(message: impl Into<String>, body: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            body,
        }
    }
}

/// The archivable model registry.
#[derive(Debug, Clone, Serialize)]
pub struct ModelsBody {
    /// Registered models in registration order.
    pub models: Vec<ModelDescriptor>,
}

/// Per-model archive counts.
#[derive(Debug, Clone, Serialize)]
pub struct StatsBody {
    /// One entry per registered model.
    pub stats: Vec<ArchiveStat>,
}

/// A single restored record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordBody {
    /// The record after restoring.
    pub data: serde_json::Value,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrms_entity::archive::BackupReport;
    use serde_json::json;

    #[test]
    fn test_flat_response_merges_fields() {
        let body = FlatResponse::with_message(
            "Backup created",
            BackupReport {
                path: "data/backups/backup-x.json".into(),
                models: 2,
                total_records: 17,
            },
        );
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "success": true,
                "message": "Backup created",
                "path": "data/backups/backup-x.json",
                "models": 2,
                "totalRecords": 17
            })
        );
    }
}
