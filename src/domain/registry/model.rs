// src/domain/registry/model.rs
use crate::domain::registry::{
    definition::{
        DEFAULT_NULL_PLACEHOLDER, DEFAULT_UNKNOWN_PLACEHOLDER, FieldResolver, Mutator,
        RelationDescriptor, RelationRegistry, SubjectDefinition,
    },
    record::Record,
};
use crate::domain::revision::{FormattedFields, SubjectType, naming::accessor_name};
use serde::Deserialize;
use std::{collections::HashMap, fmt, sync::Arc};

fn default_primary_key() -> String {
    "id".into()
}

fn default_null_placeholder() -> String {
    DEFAULT_NULL_PLACEHOLDER.into()
}

fn default_unknown_placeholder() -> String {
    DEFAULT_UNKNOWN_PLACEHOLDER.into()
}

fn default_revisionable() -> bool {
    true
}

/// Declarative [`SubjectDefinition`], loadable from JSON. Mutators can only be
/// attached in code.
#[derive(Clone, Deserialize)]
pub struct ModelDefinition {
    name: SubjectType,
    table: String,
    #[serde(default = "default_primary_key")]
    primary_key: String,
    #[serde(default)]
    identifiable_column: Option<String>,
    #[serde(default = "default_revisionable")]
    revisionable: bool,
    #[serde(default)]
    relations: HashMap<String, SubjectType>,
    #[serde(default = "default_null_placeholder")]
    null_placeholder: String,
    #[serde(default = "default_unknown_placeholder")]
    unknown_placeholder: String,
    #[serde(default)]
    formatted_fields: FormattedFields,
    #[serde(default)]
    keep_revision_of: Option<Vec<String>>,
    #[serde(default)]
    dont_keep_revision_of: Vec<String>,
    #[serde(default)]
    revision_creations_enabled: bool,
    #[serde(skip)]
    mutators: HashMap<String, Mutator>,
}

impl ModelDefinition {
    pub fn new(name: SubjectType, table: impl Into<String>) -> Self {
        Self {
            name,
            table: table.into(),
            primary_key: default_primary_key(),
            identifiable_column: None,
            revisionable: true,
            relations: HashMap::new(),
            null_placeholder: default_null_placeholder(),
            unknown_placeholder: default_unknown_placeholder(),
            formatted_fields: FormattedFields::new(),
            keep_revision_of: None,
            dont_keep_revision_of: Vec::new(),
            revision_creations_enabled: false,
            mutators: HashMap::new(),
        }
    }

    pub fn with_primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = column.into();
        self
    }

    pub fn with_identifiable_column(mut self, column: impl Into<String>) -> Self {
        self.identifiable_column = Some(column.into());
        self
    }

    /// Records of this type expose no identifiable name.
    pub fn not_revisionable(mut self) -> Self {
        self.revisionable = false;
        self
    }

    pub fn with_relation(mut self, name: impl Into<String>, related_type: SubjectType) -> Self {
        self.relations.insert(name.into(), related_type);
        self
    }

    pub fn with_placeholders(
        mut self,
        null_placeholder: impl Into<String>,
        unknown_placeholder: impl Into<String>,
    ) -> Self {
        self.null_placeholder = null_placeholder.into();
        self.unknown_placeholder = unknown_placeholder.into();
        self
    }

    pub fn with_formatted_field(mut self, key: impl Into<String>, rule: impl Into<String>) -> Self {
        self.formatted_fields.insert(key, rule);
        self
    }

    /// Register a formatter for `field_key`, stored under its accessor name.
    pub fn with_mutator<F>(mut self, field_key: &str, mutator: F) -> Self
    where
        F: Fn(Option<&str>) -> Option<String> + Send + Sync + 'static,
    {
        self.mutators
            .insert(accessor_name(field_key), Arc::new(mutator));
        self
    }

    pub fn keep_revision_of<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_revision_of = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn dont_keep_revision_of<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dont_keep_revision_of = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_revision_creations(mut self) -> Self {
        self.revision_creations_enabled = true;
        self
    }
}

impl fmt::Debug for ModelDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut mutators: Vec<_> = self.mutators.keys().collect();
        mutators.sort();
        f.debug_struct("ModelDefinition")
            .field("name", &self.name)
            .field("table", &self.table)
            .field("relations", &self.relations)
            .field("mutators", &mutators)
            .finish_non_exhaustive()
    }
}

impl FieldResolver for ModelDefinition {
    fn mutator_for(&self, field_key: &str) -> Option<Mutator> {
        self.mutators.get(&accessor_name(field_key)).cloned()
    }

    fn identifiable_name(&self, record: &Record) -> Option<String> {
        if !self.revisionable {
            return None;
        }
        let named = self
            .identifiable_column
            .as_deref()
            .and_then(|column| record.attribute_string(column));
        Some(named.unwrap_or_else(|| record.id.clone()))
    }

    fn null_placeholder(&self) -> &str {
        &self.null_placeholder
    }

    fn unknown_placeholder(&self) -> &str {
        &self.unknown_placeholder
    }

    fn format(&self, field_key: &str, value: Option<String>) -> Option<String> {
        self.formatted_fields.apply(field_key, value)
    }
}

impl RelationRegistry for ModelDefinition {
    fn describe_relation(&self, name: &str) -> Option<RelationDescriptor> {
        self.relations
            .get(name)
            .map(|related_type| RelationDescriptor {
                name: name.to_string(),
                related_type: related_type.clone(),
            })
    }
}

impl SubjectDefinition for ModelDefinition {
    fn type_name(&self) -> &SubjectType {
        &self.name
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn primary_key(&self) -> &str {
        &self.primary_key
    }

    fn tracks_field(&self, field_key: &str) -> bool {
        let kept = self
            .keep_revision_of
            .as_ref()
            .is_none_or(|keys| keys.iter().any(|k| k == field_key));
        kept && !self.dont_keep_revision_of.iter().any(|k| k == field_key)
    }

    fn revision_creations_enabled(&self) -> bool {
        self.revision_creations_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn subject(name: &str) -> SubjectType {
        SubjectType::new(name).unwrap()
    }

    #[test]
    fn json_definitions_pick_up_defaults() {
        let def: ModelDefinition = serde_json::from_value(json!({
            "name": "Post",
            "table": "posts",
            "relations": { "category": "Category" }
        }))
        .unwrap();

        assert_eq!(def.primary_key(), "id");
        assert_eq!(def.null_placeholder(), "nothing");
        assert_eq!(def.unknown_placeholder(), "unknown");
        assert_eq!(
            def.describe_relation("category").map(|r| r.related_type),
            Some(subject("Category"))
        );
        assert!(def.describe_relation("author").is_none());
    }

    #[test]
    fn mutators_are_found_by_accessor_name() {
        let def = ModelDefinition::new(subject("Post"), "posts")
            .with_mutator("published_status", |v| v.map(str::to_uppercase));

        let mutator = def.mutator_for("published_status").expect("mutator registered");
        assert_eq!(mutator(Some("draft")).as_deref(), Some("DRAFT"));
        assert!(def.mutator_for("title").is_none());
    }

    #[test]
    fn identifiable_name_prefers_configured_column() {
        let def = ModelDefinition::new(subject("Category"), "categories")
            .with_identifiable_column("title");
        let mut attrs = Map::new();
        attrs.insert("title".into(), json!("News"));
        let record = Record::new(subject("Category"), "5", attrs);
        assert_eq!(def.identifiable_name(&record).as_deref(), Some("News"));

        let bare = Record::new(subject("Category"), "6", Map::new());
        assert_eq!(def.identifiable_name(&bare).as_deref(), Some("6"));

        let hidden = def.not_revisionable();
        assert_eq!(hidden.identifiable_name(&record), None);
    }

    #[test]
    fn tracked_fields_respect_keep_and_dont_keep_lists() {
        let def = ModelDefinition::new(subject("Post"), "posts")
            .keep_revision_of(["title", "body"])
            .dont_keep_revision_of(["body"]);
        assert!(def.tracks_field("title"));
        assert!(!def.tracks_field("body"));
        assert!(!def.tracks_field("slug"));
    }
}
