// src/application/dto/revisions.rs
use crate::application::resolver::{ResponsibleUser, ValueSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RevisionUserDto {
    pub id: i64,
    pub name: String,
}

impl From<ResponsibleUser> for RevisionUserDto {
    fn from(user: ResponsibleUser) -> Self {
        Self {
            id: user.id.into(),
            name: user.display_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RevisionDto {
    pub id: i64,
    pub subject_type: String,
    pub subject_id: i64,
    pub user_id: Option<i64>,
    pub key: String,
    pub field_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub old_display: Option<String>,
    pub new_display: Option<String>,
    pub old_source: ValueSource,
    pub new_source: ValueSource,
    pub user: Option<RevisionUserDto>,
    pub created_at: DateTime<Utc>,
}
