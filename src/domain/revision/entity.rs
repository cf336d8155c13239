// src/domain/revision/entity.rs
use crate::domain::revision::value_objects::{
    FieldKey, RevisionId, SubjectId, SubjectType, ValueSide,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A single persisted field change. Never updated after insertion.
#[derive(Debug, Clone)]
pub struct Revision {
    pub id: RevisionId,
    pub subject_type: SubjectType,
    pub subject_id: SubjectId,
    pub user_id: Option<UserId>,
    pub key: FieldKey,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Revision {
    pub fn value(&self, which: ValueSide) -> Option<&str> {
        match which {
            ValueSide::Old => self.old_value.as_deref(),
            ValueSide::New => self.new_value.as_deref(),
        }
    }

    pub fn field_name(&self) -> String {
        self.key.field_name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRevision {
    pub subject_type: SubjectType,
    pub subject_id: SubjectId,
    pub user_id: Option<UserId>,
    pub key: FieldKey,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}
