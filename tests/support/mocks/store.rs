// tests/support/mocks/store.rs
use async_trait::async_trait;
use revisionable_core::application::ports::record_store::RecordStore;
use revisionable_core::domain::errors::{DomainError, DomainResult};
use revisionable_core::domain::registry::{Record, SubjectDefinition};
use revisionable_core::domain::revision::SubjectType;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// 型名とIDで引けるインメモリのレコードストア
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: HashMap<(String, String), Record>,
    failing_types: HashSet<String>,
    lookups: Arc<AtomicUsize>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `attributes` は JSON オブジェクトであること
    pub fn with(mut self, type_name: &str, id: &str, attributes: Value) -> Self {
        let attributes = match attributes {
            Value::Object(map) => map,
            other => panic!("record attributes must be an object, got {other}"),
        };
        let record = Record::new(SubjectType::new(type_name).unwrap(), id, attributes);
        self.records
            .insert((type_name.to_string(), id.to_string()), record);
        self
    }

    /// 指定した型の検索を常に失敗させる
    pub fn failing_on(mut self, type_name: &str) -> Self {
        self.failing_types.insert(type_name.to_string());
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_by_type_and_id(
        &self,
        definition: &dyn SubjectDefinition,
        id: &str,
    ) -> DomainResult<Option<Record>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let type_name = definition.type_name().as_str();
        if self.failing_types.contains(type_name) {
            return Err(DomainError::Persistence(format!("{type_name} store offline")));
        }
        Ok(self
            .records
            .get(&(type_name.to_string(), id.to_string()))
            .cloned())
    }
}
