// src/infrastructure/repositories/postgres_revision.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::revision::{
    FieldKey, NewRevision, Revision, RevisionCursor, RevisionId, RevisionRepository, SubjectId,
    SubjectType,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresRevisionRepository {
    pool: PgPool,
}

impl PostgresRevisionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RevisionRow {
    id: i64,
    subject_type: String,
    subject_id: i64,
    user_id: Option<i64>,
    key: String,
    old_value: Option<String>,
    new_value: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RevisionRow> for Revision {
    type Error = DomainError;

    fn try_from(row: RevisionRow) -> Result<Self, Self::Error> {
        Ok(Revision {
            id: RevisionId::new(row.id)?,
            subject_type: SubjectType::new(row.subject_type)?,
            subject_id: SubjectId::new(row.subject_id)?,
            user_id: row.user_id.map(UserId::new).transpose()?,
            key: FieldKey::new(row.key)?,
            old_value: row.old_value,
            new_value: row.new_value,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const REVISION_COLUMNS: &str =
    "id, subject_type, subject_id, user_id, key, old_value, new_value, created_at, updated_at";

#[async_trait]
impl RevisionRepository for PostgresRevisionRepository {
    async fn append_many(&self, revisions: Vec<NewRevision>) -> DomainResult<Vec<Revision>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let insert = format!(
            r#"
            INSERT INTO revisions (subject_type, subject_id, user_id, key, old_value, new_value)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {REVISION_COLUMNS}
            "#
        );

        let mut stored = Vec::with_capacity(revisions.len());
        for revision in revisions {
            let row = sqlx::query_as::<_, RevisionRow>(&insert)
                .bind(revision.subject_type.as_str())
                .bind(i64::from(revision.subject_id))
                .bind(revision.user_id.map(i64::from))
                .bind(revision.key.as_str())
                .bind(revision.old_value)
                .bind(revision.new_value)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            stored.push(Revision::try_from(row)?);
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(stored)
    }

    async fn find_by_id(&self, id: RevisionId) -> DomainResult<Option<Revision>> {
        let row = sqlx::query_as::<_, RevisionRow>(&format!(
            "SELECT {REVISION_COLUMNS} FROM revisions WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Revision::try_from).transpose()
    }

    async fn list_by_subject(
        &self,
        subject_type: &SubjectType,
        subject_id: SubjectId,
        limit: u32,
        cursor: Option<RevisionCursor>,
    ) -> DomainResult<(Vec<Revision>, Option<String>)> {
        let (cursor_created_at, cursor_id) = match cursor {
            Some(c) => (Some(c.created_at), Some(c.id)),
            None => (None, None),
        };

        let rows = sqlx::query_as::<_, RevisionRow>(&format!(
            r#"
            SELECT {REVISION_COLUMNS}
            FROM revisions
            WHERE subject_type = $1
              AND subject_id = $2
              AND ($3::timestamptz IS NULL OR (created_at, id) < ($3, $4))
            ORDER BY created_at DESC, id DESC
            LIMIT $5
            "#
        ))
        .bind(subject_type.as_str())
        .bind(i64::from(subject_id))
        .bind(cursor_created_at)
        .bind(cursor_id)
        .bind(i64::from(limit) + 1)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut revisions = rows
            .into_iter()
            .map(Revision::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let next_cursor = if revisions.len() > limit as usize {
            revisions.truncate(limit as usize);
            revisions
                .last()
                .map(|last| RevisionCursor::new(last.created_at, last.id.into()).encode())
        } else {
            None
        };

        Ok((revisions, next_cursor))
    }
}
