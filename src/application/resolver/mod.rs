// src/application/resolver/mod.rs
//! Turns stored revision values into display values, following foreign keys
//! through the type registry. Every path has a fallback; nothing here fails.
mod outcome;

pub use outcome::{RelationFallback, ResolvedValue, ValueSource};

use crate::application::ports::{record_store::RecordStore, settings::SettingsSource};
use crate::domain::{
    registry::{Record, SubjectDefinition, TypeRegistry},
    revision::{Revision, ValueSide, naming::camel_case},
    user::UserId,
};
use std::sync::Arc;

pub const DEFAULT_PRIMARY_USER_TYPE_KEY: &str = "auth.model";
pub const DEFAULT_SECONDARY_USER_TYPE_KEY: &str = "auth.providers.users.model";

/// Settings keys holding the user type, tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTypeKeys {
    pub primary: String,
    pub secondary: String,
}

impl Default for UserTypeKeys {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_USER_TYPE_KEY.into(),
            secondary: DEFAULT_SECONDARY_USER_TYPE_KEY.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponsibleUser {
    pub id: UserId,
    pub display_name: String,
    pub record: Record,
}

pub struct RevisionValueResolver {
    registry: Arc<dyn TypeRegistry>,
    store: Arc<dyn RecordStore>,
    settings: Arc<dyn SettingsSource>,
    user_type_keys: UserTypeKeys,
}

impl RevisionValueResolver {
    pub fn new(
        registry: Arc<dyn TypeRegistry>,
        store: Arc<dyn RecordStore>,
        settings: Arc<dyn SettingsSource>,
        user_type_keys: UserTypeKeys,
    ) -> Self {
        Self {
            registry,
            store,
            settings,
            user_type_keys,
        }
    }

    pub fn field_name(&self, revision: &Revision) -> String {
        revision.field_name()
    }

    pub async fn resolve_value(&self, revision: &Revision, which: ValueSide) -> ResolvedValue {
        let raw = revision.value(which).map(str::to_string);

        let Some(subject) = self.registry.definition(revision.subject_type.as_str()) else {
            tracing::debug!(
                subject_type = %revision.subject_type,
                "subject type not registered; returning stored value"
            );
            return ResolvedValue::raw(raw);
        };

        let mut fallback = None;
        if revision.key.is_relation() {
            match self.resolve_relation(subject.as_ref(), revision, which).await {
                Ok(resolved) => return resolved,
                Err(reason) => {
                    if matches!(reason, RelationFallback::LookupFailed(_)) {
                        tracing::warn!(
                            key = %revision.key,
                            side = %which,
                            %reason,
                            "relation resolution failed"
                        );
                    } else {
                        tracing::debug!(
                            key = %revision.key,
                            side = %which,
                            %reason,
                            "relation resolution skipped"
                        );
                    }
                    fallback = Some(reason);
                }
            }
        }

        let key = revision.key.as_str();
        let resolved = match subject.mutator_for(key) {
            Some(mutator) => ResolvedValue::new(
                subject.format(key, mutator(raw.as_deref())),
                ValueSource::Mutator,
            ),
            None => ResolvedValue::new(subject.format(key, raw), ValueSource::Scalar),
        };
        resolved.with_fallback(fallback)
    }

    async fn resolve_relation(
        &self,
        subject: &dyn SubjectDefinition,
        revision: &Revision,
        which: ValueSide,
    ) -> Result<ResolvedValue, RelationFallback> {
        let key = revision.key.as_str();
        let name = revision
            .key
            .relation_name()
            .ok_or_else(|| RelationFallback::RelationNotFound(key.to_string()))?;

        let relation = subject
            .describe_relation(name)
            .or_else(|| subject.describe_relation(&camel_case(name)))
            .ok_or_else(|| RelationFallback::RelationNotFound(name.to_string()))?;

        let related = self
            .registry
            .definition(relation.related_type.as_str())
            .ok_or_else(|| {
                RelationFallback::UnresolvableRelatedType(relation.related_type.to_string())
            })?;

        let raw_id = match revision.value(which) {
            None | Some("") => {
                return Ok(ResolvedValue::new(
                    Some(related.null_placeholder().to_string()),
                    ValueSource::NullPlaceholder,
                ));
            }
            Some(id) => id,
        };

        let item = self
            .store
            .find_by_type_and_id(related.as_ref(), raw_id)
            .await
            .map_err(|err| RelationFallback::LookupFailed(err.to_string()))?;

        let Some(item) = item else {
            return Ok(ResolvedValue::new(
                subject.format(key, Some(related.unknown_placeholder().to_string())),
                ValueSource::UnknownPlaceholder,
            ));
        };

        let name = related.identifiable_name(&item).ok_or_else(|| {
            RelationFallback::NotIdentifiable(relation.related_type.to_string())
        })?;

        let value = match related.mutator_for(key) {
            Some(mutator) => {
                let mutated_key = mutator(Some(key)).unwrap_or_else(|| key.to_string());
                subject.format(&mutated_key, Some(name))
            }
            None => subject.format(key, Some(name)),
        };

        Ok(ResolvedValue::new(value, ValueSource::RelatedName))
    }

    /// The tracked record itself, if its type is registered and the row still exists.
    pub async fn subject_record(&self, revision: &Revision) -> Option<Record> {
        let definition = self.registry.definition(revision.subject_type.as_str())?;
        let id = revision.subject_id.to_string();
        match self.store.find_by_type_and_id(definition.as_ref(), &id).await {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(
                    subject_type = %revision.subject_type,
                    subject_id = %revision.subject_id,
                    error = %err,
                    "failed to load revision subject"
                );
                None
            }
        }
    }

    /// First non-blank value among the configured user type keys.
    pub fn configured_user_type(&self) -> Option<String> {
        [&self.user_type_keys.primary, &self.user_type_keys.secondary]
            .into_iter()
            .filter_map(|key| self.settings.get(key))
            .find(|value| !value.trim().is_empty())
    }

    pub async fn responsible_user(&self, revision: &Revision) -> Option<ResponsibleUser> {
        let user_id = revision.user_id?;

        let Some(user_type) = self.configured_user_type() else {
            tracing::debug!("no user type configured; responsible user unavailable");
            return None;
        };
        let Some(definition) = self.registry.definition(&user_type) else {
            tracing::debug!(%user_type, "configured user type is not registered");
            return None;
        };

        let record = match self.store.find_user(definition.as_ref(), user_id).await {
            Ok(record) => record?,
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "failed to load responsible user");
                return None;
            }
        };

        let display_name = definition
            .identifiable_name(&record)
            .unwrap_or_else(|| record.id.clone());
        Some(ResponsibleUser {
            id: user_id,
            display_name,
            record,
        })
    }
}
