// src/application/commands/revisions/record.rs
use super::RevisionCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        registry::{SubjectDefinition, stored_value},
        revision::{FieldKey, NewRevision, Revision, SubjectId, SubjectType},
        user::UserId,
    },
};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Timestamp columns maintained by the store itself; never tracked.
const UNTRACKED_KEYS: [&str; 2] = ["created_at", "updated_at"];
const CREATION_KEY: &str = "created_at";

#[derive(Debug, Clone)]
pub struct RecordChangesCommand {
    pub subject_type: String,
    pub subject_id: i64,
    pub user_id: Option<i64>,
    pub before: Map<String, Value>,
    pub after: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct RecordCreationCommand {
    pub subject_type: String,
    pub subject_id: i64,
    pub user_id: Option<i64>,
}

struct Subject {
    definition: Arc<dyn SubjectDefinition>,
    subject_type: SubjectType,
    subject_id: SubjectId,
    user_id: Option<UserId>,
}

impl RevisionCommandService {
    /// Store one revision per tracked attribute whose stored form changed.
    pub async fn record_changes(
        &self,
        command: RecordChangesCommand,
    ) -> ApplicationResult<Vec<Revision>> {
        let subject = self.subject(&command.subject_type, command.subject_id, command.user_id)?;

        let mut pending = Vec::new();
        for (key, new_value) in &command.after {
            if UNTRACKED_KEYS.contains(&key.as_str()) || !subject.definition.tracks_field(key) {
                continue;
            }
            let old_value = command.before.get(key).and_then(stored_value);
            let new_value = stored_value(new_value);
            if old_value == new_value {
                continue;
            }
            pending.push(NewRevision {
                subject_type: subject.subject_type.clone(),
                subject_id: subject.subject_id,
                user_id: subject.user_id,
                key: FieldKey::new(key.clone())?,
                old_value,
                new_value,
            });
        }

        if pending.is_empty() {
            tracing::debug!(
                subject_type = %subject.subject_type,
                subject_id = %subject.subject_id,
                "no tracked attribute changed"
            );
            return Ok(Vec::new());
        }

        let stored = self.repo.append_many(pending).await?;
        tracing::info!(
            subject_type = %subject.subject_type,
            subject_id = %subject.subject_id,
            count = stored.len(),
            "recorded revisions"
        );
        Ok(stored)
    }

    /// Store a `created_at` revision when the subject type opts into creation tracking.
    pub async fn record_creation(
        &self,
        command: RecordCreationCommand,
    ) -> ApplicationResult<Option<Revision>> {
        let subject = self.subject(&command.subject_type, command.subject_id, command.user_id)?;
        if !subject.definition.revision_creations_enabled() {
            return Ok(None);
        }

        let revision = NewRevision {
            subject_type: subject.subject_type,
            subject_id: subject.subject_id,
            user_id: subject.user_id,
            key: FieldKey::new(CREATION_KEY)?,
            old_value: None,
            new_value: Some(self.clock.now().to_rfc3339()),
        };

        let mut stored = self.repo.append_many(vec![revision]).await?;
        Ok(stored.pop())
    }

    fn subject(
        &self,
        subject_type: &str,
        subject_id: i64,
        user_id: Option<i64>,
    ) -> ApplicationResult<Subject> {
        let subject_type = SubjectType::new(subject_type)?;
        let subject_id = SubjectId::new(subject_id)?;
        let user_id = user_id.map(UserId::new).transpose()?;
        let definition = self
            .registry
            .definition(subject_type.as_str())
            .ok_or_else(|| {
                ApplicationError::validation(format!("subject type '{subject_type}' is not registered"))
            })?;

        Ok(Subject {
            definition,
            subject_type,
            subject_id,
            user_id,
        })
    }
}
