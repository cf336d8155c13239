// src/infrastructure/registry.rs
use crate::domain::{
    errors::{DomainError, DomainResult},
    registry::{ModelDefinition, SubjectDefinition, TypeRegistry},
};
use std::{collections::HashMap, fs, path::Path, sync::Arc};

/// Registry of explicitly registered subject types, immutable once shared.
#[derive(Default, Clone)]
pub struct InMemoryTypeRegistry {
    definitions: HashMap<String, Arc<dyn SubjectDefinition>>,
}

impl InMemoryTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<D>(mut self, definition: D) -> Self
    where
        D: SubjectDefinition + 'static,
    {
        self.insert(Arc::new(definition));
        self
    }

    pub fn insert(&mut self, definition: Arc<dyn SubjectDefinition>) {
        let name = definition.type_name().to_string();
        if self.definitions.insert(name.clone(), definition).is_some() {
            tracing::warn!(subject_type = %name, "subject type registered twice; keeping the latest");
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Parse a JSON array of model definitions.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let definitions: Vec<ModelDefinition> = serde_json::from_str(raw)
            .map_err(|err| DomainError::Validation(format!("invalid type registry: {err}")))?;

        let mut registry = Self::new();
        for definition in definitions {
            registry.insert(Arc::new(definition));
        }
        registry.validate()?;
        Ok(registry)
    }

    pub fn load(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            DomainError::Validation(format!("cannot read type registry {}: {err}", path.display()))
        })?;
        let registry = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), types = registry.len(), "loaded type registry");
        Ok(registry)
    }

    fn validate(&self) -> DomainResult<()> {
        for definition in self.definitions.values() {
            if definition.table().trim().is_empty() {
                return Err(DomainError::Validation(format!(
                    "subject type '{}' has no table",
                    definition.type_name()
                )));
            }
        }
        Ok(())
    }
}

impl TypeRegistry for InMemoryTypeRegistry {
    fn definition(&self, type_name: &str) -> Option<Arc<dyn SubjectDefinition>> {
        self.definitions.get(type_name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::revision::SubjectType;

    #[test]
    fn registry_loads_json_definitions() {
        let registry = InMemoryTypeRegistry::from_json(
            r#"[
                {"name": "Post", "table": "posts", "relations": {"category": "Category"}},
                {"name": "Category", "table": "categories", "identifiable_column": "title"}
            ]"#,
        )
        .expect("valid registry");

        assert_eq!(registry.len(), 2);
        assert!(registry.definition("Comment").is_none());
        let post = registry.definition("Post").unwrap();
        assert_eq!(
            post.describe_relation("category").unwrap().related_type,
            SubjectType::new("Category").unwrap()
        );
    }

    #[test]
    fn registry_rejects_blank_tables_and_bad_json() {
        assert!(InMemoryTypeRegistry::from_json(r#"[{"name": "Post", "table": " "}]"#).is_err());
        assert!(InMemoryTypeRegistry::from_json(r#"[{"name": "", "table": "posts"}]"#).is_err());
        assert!(InMemoryTypeRegistry::from_json("{").is_err());
    }

    #[test]
    fn registered_definitions_are_looked_up_by_name() {
        let registry = InMemoryTypeRegistry::new().register(ModelDefinition::new(
            SubjectType::new("Category").unwrap(),
            "categories",
        ));
        assert!(registry.definition("Category").is_some());
        assert!(registry.definition("category").is_none());
    }
}
