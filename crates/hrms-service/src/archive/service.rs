//! Cross-model archive operations.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

use hrms_core::config::ArchiveConfig;
use hrms_core::error::AppError;
use hrms_core::result::AppResult;
use hrms_core::types::ModelDescriptor;
use hrms_entity::archive::{
    ArchiveSnapshot, ArchiveStat, ArchivedTable, BackupReport, ModelArchive, RestoreDetail,
    RestoreSummary,
};

use super::backup::BackupWriter;
use super::registry::ModelRegistry;

/// Orchestrates archive storage across every registered model.
///
/// Models are visited one after another in registration order, so a
/// snapshot or sweep is not consistent across models. Any model failing
/// fails the whole operation.
#[derive(Debug, Clone)]
pub struct ArchiveService {
    registry: Arc<ModelRegistry>,
    backups: BackupWriter,
    backup_before_restore: bool,
}

impl ArchiveService {
    /// Create an archive service over `registry`.
    pub fn new(registry: Arc<ModelRegistry>, config: &ArchiveConfig) -> Self {
        Self {
            registry,
            backups: BackupWriter::new(&config.backup_dir),
            backup_before_restore: config.backup_before_restore,
        }
    }

    /// Descriptors of every registered model.
    pub fn list_archivable_models(&self) -> Vec<ModelDescriptor> {
        self.registry.list_archivable_models()
    }

    /// Archived records of every model that has any.
    pub async fn get_all_archived_data(&self) -> AppResult<ArchiveSnapshot> {
        let mut tables = Vec::new();
        for repo in self.registry.repositories() {
            let model = repo.descriptor();
            let records = repo
                .find_archived()
                .await
                .map_err(|e| e.context(format!("list archived {}", model.name)))?;
            tables.push((
                model.name.to_string(),
                ArchivedTable {
                    collection_name: model.collection.to_string(),
                    count: records.len() as u64,
                    records,
                },
            ));
        }

        let snapshot = ArchiveSnapshot::from_tables(tables)?;
        info!(
            tables = snapshot.total_tables,
            records = snapshot.total_records,
            "Built archive snapshot"
        );
        Ok(snapshot)
    }

    /// Restore every archived record of every model.
    ///
    /// A recovery backup is written first when configured.
    pub async fn restore_all_archived(&self) -> AppResult<RestoreSummary> {
        let backup_path = if self.backup_before_restore {
            let report = self
                .create_backup()
                .await
                .map_err(|e| e.context("pre-restore backup"))?;
            Some(report.path)
        } else {
            None
        };

        let mut details = Vec::new();
        for repo in self.registry.repositories() {
            let model = repo.descriptor();
            let restored = repo
                .restore_all()
                .await
                .map_err(|e| e.context(format!("restore {}", model.name)))?;
            if restored > 0 {
                details.push(RestoreDetail {
                    model: model.name.to_string(),
                    collection: model.collection.to_string(),
                    restored,
                });
            }
        }

        let total_restored = details.iter().map(|d| d.restored).sum();
        info!(total_restored, models = details.len(), "Restored all archived records");
        Ok(RestoreSummary {
            total_restored,
            details,
            backup_path,
        })
    }

    /// Restore one record of `model_name`.
    ///
    /// Restoring an active record returns it unchanged.
    pub async fn restore_by_id(&self, model_name: &str, id: &str) -> AppResult<Value> {
        let repo = self.registry.resolve(model_name)?;
        let id = parse_record_id(id)?;
        let model = repo.descriptor();

        let record = repo
            .restore_by_id(id)
            .await
            .map_err(|e| e.context(format!("restore {} {id}", model.name)))?
            .ok_or_else(AppError::record_not_found)?;

        info!(model = model.name, %id, "Restored record");
        Ok(record)
    }

    /// Restore every archived record of one model, addressed by name or collection.
    pub async fn restore_by_model(&self, name: &str) -> AppResult<RestoreDetail> {
        let repo = self.registry.resolve(name)?;
        let model = repo.descriptor();
        let restored = repo
            .restore_all()
            .await
            .map_err(|e| e.context(format!("restore {}", model.name)))?;

        info!(model = model.name, restored, "Restored model");
        Ok(RestoreDetail {
            model: model.name.to_string(),
            collection: model.collection.to_string(),
            restored,
        })
    }

    /// Archived records of one model.
    pub async fn get_archived_by_model(&self, name: &str) -> AppResult<ModelArchive> {
        let repo = self.registry.resolve(name)?;
        let model = repo.descriptor();
        let records = repo
            .find_archived()
            .await
            .map_err(|e| e.context(format!("list archived {}", model.name)))?;

        Ok(ModelArchive {
            model: model.name.to_string(),
            count: records.len() as u64,
            records,
        })
    }

    /// Archived and active counts for every registered model.
    pub async fn get_archive_stats(&self) -> AppResult<Vec<ArchiveStat>> {
        let mut stats = Vec::new();
        for repo in self.registry.repositories() {
            let model = repo.descriptor();
            let archived = repo
                .count_by_flag(true)
                .await
                .map_err(|e| e.context(format!("count archived {}", model.name)))?;
            let active = repo
                .count_by_flag(false)
                .await
                .map_err(|e| e.context(format!("count active {}", model.name)))?;
            stats.push(ArchiveStat {
                model: model.name.to_string(),
                collection: model.collection.to_string(),
                archived,
                active,
                total: archived + active,
            });
        }
        Ok(stats)
    }

    /// Export every record of every model to a new backup file.
    pub async fn create_backup(&self) -> AppResult<BackupReport> {
        let mut models = Map::new();
        let mut total_records = 0;
        for repo in self.registry.repositories() {
            let model = repo.descriptor();
            let records = repo
                .find_all()
                .await
                .map_err(|e| e.context(format!("export {}", model.name)))?;
            total_records += records.len() as u64;
            models.insert(model.name.to_string(), Value::Array(records));
        }

        let path = self.backups.write(&models).await?;
        Ok(BackupReport {
            path: path.display().to_string(),
            models: models.len(),
            total_records,
        })
    }
}

fn parse_record_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::validation(format!("Invalid record id '{id}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrms_core::error::ErrorKind;
    use hrms_core::traits::ArchivableRepository;
    use hrms_database::memory::MemoryArchivableRepository;
    use hrms_entity::resource::{Department, Employee};
    use serde_json::json;
    use tempfile::TempDir;

    struct Fixture {
        service: ArchiveService,
        departments: Arc<MemoryArchivableRepository>,
        employees: Arc<MemoryArchivableRepository>,
        _tmp: TempDir,
    }

    async fn fixture(backup_before_restore: bool) -> Fixture {
        let tmp = tempfile::tempdir().unwrap();
        let departments = Arc::new(MemoryArchivableRepository::new(Department::DESCRIPTOR));
        let employees = Arc::new(MemoryArchivableRepository::new(Employee::DESCRIPTOR));
        departments.seed(5, 2).await;
        employees.seed(10, 0).await;

        let registry = Arc::new(ModelRegistry::new());
        registry.register(departments.clone()).unwrap();
        registry.register(employees.clone()).unwrap();

        let config = ArchiveConfig {
            backup_dir: tmp.path().join("backups").display().to_string(),
            backup_before_restore,
            ..ArchiveConfig::default()
        };
        Fixture {
            service: ArchiveService::new(registry, &config),
            departments,
            employees,
            _tmp: tmp,
        }
    }

    fn stat(model: &str, collection: &str, archived: u64, active: u64) -> ArchiveStat {
        ArchiveStat {
            model: model.into(),
            collection: collection.into(),
            archived,
            active,
            total: archived + active,
        }
    }

    #[tokio::test]
    async fn test_stats_include_every_model() {
        let fx = fixture(false).await;
        let stats = fx.service.get_archive_stats().await.unwrap();
        assert_eq!(
            stats,
            vec![
                stat("Department", "departments", 2, 5),
                stat("Employee", "employees", 0, 10),
            ]
        );
    }

    #[tokio::test]
    async fn test_snapshot_omits_models_without_archived_records() {
        let fx = fixture(false).await;
        let snapshot = fx.service.get_all_archived_data().await.unwrap();

        assert_eq!(snapshot.total_tables, 1);
        assert_eq!(snapshot.total_records, 2);
        assert_eq!(snapshot.archives["Department"]["count"], json!(2));
        assert_eq!(
            snapshot.archives["Department"]["collectionName"],
            json!("departments")
        );
        assert!(!snapshot.archives.contains_key("Employee"));
    }

    #[tokio::test]
    async fn test_restore_all_totals_match_details() {
        let fx = fixture(false).await;
        fx.employees.seed(0, 3).await;

        let summary = fx.service.restore_all_archived().await.unwrap();
        assert_eq!(summary.total_restored, 5);
        assert_eq!(
            summary.total_restored,
            summary.details.iter().map(|d| d.restored).sum::<u64>()
        );
        assert!(summary.backup_path.is_none());

        let again = fx.service.restore_all_archived().await.unwrap();
        assert_eq!(again.total_restored, 0);
        assert!(again.details.is_empty());
        assert_eq!(fx.departments.count_by_flag(true).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_restore_all_writes_backup_first() {
        let fx = fixture(true).await;
        let summary = fx.service.restore_all_archived().await.unwrap();

        let path = summary.backup_path.expect("backup path");
        let backup: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        let archived_in_backup = backup["Department"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|r| r["archive_department"] == json!(true))
            .count();
        assert_eq!(archived_in_backup, 2);
    }

    #[tokio::test]
    async fn test_restore_by_id() {
        let fx = fixture(false).await;
        let archived = fx.departments.find_archived().await.unwrap();
        let id = archived[0]["id"].as_str().unwrap().to_string();

        let restored = fx.service.restore_by_id("Department", &id).await.unwrap();
        assert_eq!(restored["archive_department"], json!(false));

        let again = fx.service.restore_by_id("Department", &id).await.unwrap();
        assert_eq!(again, restored);
        assert_eq!(fx.departments.count_by_flag(true).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_restore_by_id_errors() {
        let fx = fixture(false).await;

        let missing = Uuid::new_v4().to_string();
        let err = fx.service.restore_by_id("Department", &missing).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Record not found");

        let err = fx.service.restore_by_id("Payslip", &missing).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ModelNotFound);
        assert!(err.message.contains("Payslip"));

        let err = fx.service.restore_by_id("Department", "42").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_restore_by_model_accepts_collection() {
        let fx = fixture(false).await;
        let detail = fx.service.restore_by_model("departments").await.unwrap();
        assert_eq!(detail.model, "Department");
        assert_eq!(detail.restored, 2);

        let listing = fx.service.get_archived_by_model("Department").await.unwrap();
        assert_eq!(listing.count, 0);
    }

    #[tokio::test]
    async fn test_backup_counts_every_record() {
        let fx = fixture(false).await;
        let report = fx.service.create_backup().await.unwrap();
        assert_eq!(report.models, 2);
        assert_eq!(report.total_records, 17);
        assert!(report.path.ends_with(".json"));
    }

    #[tokio::test]
    async fn test_one_failing_model_fails_aggregation() {
        let fx = fixture(false).await;
        fx.employees.set_unavailable(true);

        let err = fx.service.get_archive_stats().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
        assert!(err.message.contains("Employee"));
        assert!(fx.service.get_all_archived_data().await.is_err());
    }
}
