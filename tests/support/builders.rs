// tests/support/builders.rs
use chrono::Utc;
use revisionable_core::domain::registry::ModelDefinition;
use revisionable_core::domain::revision::{FieldKey, Revision, RevisionId, SubjectId, SubjectType};
use revisionable_core::domain::user::UserId;
use revisionable_core::infrastructure::registry::InMemoryTypeRegistry;
use revisionable_core::infrastructure::settings::StaticSettings;
use serde_json::json;

use super::mocks::InMemoryRecordStore;

fn subject(name: &str) -> SubjectType {
    SubjectType::new(name).unwrap()
}

/// 投稿・カテゴリ・ステータス・ユーザーなどを登録したレジストリ
///
/// Post の関連:
/// - category -> Category (独自プレースホルダー)
/// - publishedStatus -> Status (camelCase 名でのみ登録)
/// - tag -> Tag (未登録の型)
/// - editor -> Editor (識別名を持たない)
/// - reviewer -> Reviewer (ストアが失敗する)
pub fn blog_registry() -> InMemoryTypeRegistry {
    InMemoryTypeRegistry::new()
        .register(
            ModelDefinition::new(subject("Post"), "posts")
                .with_identifiable_column("title")
                .with_relation("category", subject("Category"))
                .with_relation("publishedStatus", subject("Status"))
                .with_relation("tag", subject("Tag"))
                .with_relation("editor", subject("Editor"))
                .with_relation("reviewer", subject("Reviewer"))
                .with_mutator("status", |value| value.map(str::to_uppercase))
                .with_formatted_field("public", "boolean:No|Yes")
                .with_formatted_field("status_label", "string:Status: %s")
                .with_formatted_field("published_at", "datetime:%Y-%m-%d %z")
                .dont_keep_revision_of(["views"])
                .with_revision_creations(),
        )
        .register(
            ModelDefinition::new(subject("Category"), "categories")
                .with_identifiable_column("title")
                .with_placeholders("No category", "Unknown category"),
        )
        .register(
            ModelDefinition::new(subject("Status"), "statuses")
                .with_identifiable_column("label")
                .with_mutator("published_statusId", |_| Some("status_label".into())),
        )
        .register(ModelDefinition::new(subject("Editor"), "editors").not_revisionable())
        .register(ModelDefinition::new(subject("Reviewer"), "reviewers"))
        .register(ModelDefinition::new(subject("User"), "users").with_identifiable_column("name"))
        .register(
            ModelDefinition::new(subject("Page"), "pages").keep_revision_of(["title"]),
        )
}

pub fn blog_store() -> InMemoryRecordStore {
    InMemoryRecordStore::new()
        .with("Post", "1", json!({"id": 1, "title": "Hello"}))
        .with("Category", "3", json!({"id": 3, "title": "News"}))
        .with("Status", "2", json!({"id": 2, "label": "Published"}))
        .with("Editor", "4", json!({"id": 4}))
        .with("User", "7", json!({"id": 7, "name": "Ada"}))
        .failing_on("Reviewer")
}

/// auth.model は空、フォールバックキーで User を指す設定
pub fn user_settings() -> StaticSettings {
    StaticSettings::new()
        .with("auth.model", "")
        .with("auth.providers.users.model", "User")
}

pub struct RevisionBuilder {
    id: i64,
    subject_type: String,
    subject_id: i64,
    user_id: Option<i64>,
    key: String,
    old_value: Option<String>,
    new_value: Option<String>,
}

impl RevisionBuilder {
    pub fn new(subject_type: &str, key: &str) -> Self {
        Self {
            id: 1,
            subject_type: subject_type.into(),
            subject_id: 1,
            user_id: None,
            key: key.into(),
            old_value: None,
            new_value: None,
        }
    }

    pub fn old(mut self, value: &str) -> Self {
        self.old_value = Some(value.into());
        self
    }

    pub fn new_value(mut self, value: &str) -> Self {
        self.new_value = Some(value.into());
        self
    }

    pub fn user(mut self, id: i64) -> Self {
        self.user_id = Some(id);
        self
    }

    pub fn subject_id(mut self, id: i64) -> Self {
        self.subject_id = id;
        self
    }

    pub fn build(self) -> Revision {
        let now = Utc::now();
        Revision {
            id: RevisionId::new(self.id).unwrap(),
            subject_type: SubjectType::new(self.subject_type).unwrap(),
            subject_id: SubjectId::new(self.subject_id).unwrap(),
            user_id: self.user_id.map(|id| UserId::new(id).unwrap()),
            key: FieldKey::new(self.key).unwrap(),
            old_value: self.old_value,
            new_value: self.new_value,
            created_at: now,
            updated_at: now,
        }
    }
}
