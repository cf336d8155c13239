// src/infrastructure/repositories/postgres_record_store.rs
use super::map_sqlx;
use crate::application::ports::record_store::RecordStore;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::registry::{Record, SubjectDefinition};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

/// Loads host rows as JSON objects from the table named by each definition.
#[derive(Clone)]
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Quote a possibly schema-qualified identifier (`public.posts`).
fn quote_ident(name: &str) -> String {
    name.split('.')
        .map(|part| format!("\"{}\"", part.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    async fn find_by_type_and_id(
        &self,
        definition: &dyn SubjectDefinition,
        id: &str,
    ) -> DomainResult<Option<Record>> {
        let sql = format!(
            "SELECT to_jsonb(t) FROM {} AS t WHERE t.{}::text = $1 LIMIT 1",
            quote_ident(definition.table()),
            quote_ident(definition.primary_key()),
        );

        let row = sqlx::query_scalar::<_, Value>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            None => Ok(None),
            Some(Value::Object(attributes)) => Ok(Some(Record::new(
                definition.type_name().clone(),
                id,
                attributes,
            ))),
            Some(other) => Err(DomainError::Persistence(format!(
                "expected a JSON object row for {}, got {other}",
                definition.type_name()
            ))),
        }
    }
}
