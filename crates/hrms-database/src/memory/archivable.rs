//! In-memory soft-delete repository.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use hrms_core::error::AppError;
use hrms_core::result::AppResult;
use hrms_core::traits::ArchivableRepository;
use hrms_core::types::ModelDescriptor;

/// JSON records of one model kept in insertion order.
#[derive(Debug)]
pub struct MemoryArchivableRepository {
    descriptor: ModelDescriptor,
    records: RwLock<Vec<Value>>,
    unavailable: AtomicBool,
}

impl MemoryArchivableRepository {
    /// Create an empty repository for `descriptor`.
    pub fn new(descriptor: ModelDescriptor) -> Self {
        Self {
            descriptor,
            records: RwLock::new(Vec::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Store a record built from `fields`.
    ///
    /// Missing `id`, `created_at`, `updated_at` and flag fields are filled
    /// in; the flag defaults to `false`. Returns the stored record.
    pub async fn insert(&self, fields: Value) -> Value {
        let mut object = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let now = Value::String(Utc::now().to_rfc3339());
        object
            .entry("id")
            .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        object.entry("created_at").or_insert_with(|| now.clone());
        object.entry("updated_at").or_insert(now);
        object
            .entry(self.descriptor.flag_field)
            .or_insert(Value::Bool(false));

        let record = Value::Object(object);
        self.records.write().await.push(record.clone());
        record
    }

    /// Insert `active` unflagged and `archived` flagged records.
    pub async fn seed(&self, active: usize, archived: usize) {
        for i in 0..active {
            self.insert(serde_json::json!({ "name": format!("active-{i}") }))
                .await;
        }
        for i in 0..archived {
            let mut fields = Map::new();
            fields.insert("name".into(), Value::String(format!("archived-{i}")));
            fields.insert(self.descriptor.flag_field.into(), Value::Bool(true));
            self.insert(Value::Object(fields)).await;
        }
    }

    /// Make every subsequent call fail with a database error, or recover.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::database(format!(
                "{} storage is unavailable",
                self.descriptor.name
            )));
        }
        Ok(())
    }

    fn is_archived(&self, record: &Value) -> bool {
        record
            .get(self.descriptor.flag_field)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    async fn set_flag(&self, id: Uuid, archived: bool) -> AppResult<Option<Value>> {
        self.check_available()?;
        let id = id.to_string();
        let mut records = self.records.write().await;
        let Some(record) = records
            .iter_mut()
            .find(|r| r.get("id").and_then(Value::as_str) == Some(id.as_str()))
        else {
            return Ok(None);
        };
        if self.is_archived(record) != archived {
            record[self.descriptor.flag_field] = Value::Bool(archived);
            record["updated_at"] = Value::String(Utc::now().to_rfc3339());
        }
        Ok(Some(record.clone()))
    }
}

fn created_at(record: &Value) -> Option<DateTime<Utc>> {
    record
        .get("created_at")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

#[async_trait]
impl ArchivableRepository for MemoryArchivableRepository {
    fn descriptor(&self) -> &ModelDescriptor {
        &self.descriptor
    }

    async fn find_archived(&self) -> AppResult<Vec<Value>> {
        self.check_available()?;
        // Later inserts win ties on created_at.
        let mut archived: Vec<Value> = self
            .records
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| self.is_archived(r))
            .cloned()
            .collect();
        archived.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
        Ok(archived)
    }

    async fn find_all(&self) -> AppResult<Vec<Value>> {
        self.check_available()?;
        Ok(self.records.read().await.clone())
    }

    async fn count_by_flag(&self, archived: bool) -> AppResult<u64> {
        self.check_available()?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| self.is_archived(r) == archived)
            .count() as u64)
    }

    async fn restore_all(&self) -> AppResult<u64> {
        self.check_available()?;
        let now = Value::String(Utc::now().to_rfc3339());
        let mut restored = 0;
        for record in self.records.write().await.iter_mut() {
            if self.is_archived(record) {
                record[self.descriptor.flag_field] = Value::Bool(false);
                record["updated_at"] = now.clone();
                restored += 1;
            }
        }
        Ok(restored)
    }

    async fn restore_by_id(&self, id: Uuid) -> AppResult<Option<Value>> {
        self.set_flag(id, false).await
    }

    async fn archive_by_id(&self, id: Uuid) -> AppResult<Option<Value>> {
        self.set_flag(id, true).await
    }
}
