// src/domain/registry/definition.rs
use crate::domain::registry::record::Record;
use crate::domain::revision::SubjectType;
use std::sync::Arc;

pub const DEFAULT_NULL_PLACEHOLDER: &str = "nothing";
pub const DEFAULT_UNKNOWN_PLACEHOLDER: &str = "unknown";

/// Field-specific formatter. Receives the raw value and returns its display form.
pub type Mutator = Arc<dyn Fn(Option<&str>) -> Option<String> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDescriptor {
    pub name: String,
    pub related_type: SubjectType,
}

pub trait FieldResolver: Send + Sync {
    fn mutator_for(&self, field_key: &str) -> Option<Mutator>;

    /// Human-readable label for a loaded record. `None` means the type does not
    /// take part in revision display.
    fn identifiable_name(&self, record: &Record) -> Option<String>;

    fn null_placeholder(&self) -> &str {
        DEFAULT_NULL_PLACEHOLDER
    }

    fn unknown_placeholder(&self) -> &str {
        DEFAULT_UNKNOWN_PLACEHOLDER
    }

    /// Last formatting step applied to every resolved value of this subject type.
    fn format(&self, _field_key: &str, value: Option<String>) -> Option<String> {
        value
    }
}

pub trait RelationRegistry: Send + Sync {
    fn describe_relation(&self, name: &str) -> Option<RelationDescriptor>;
}

pub trait SubjectDefinition: FieldResolver + RelationRegistry {
    fn type_name(&self) -> &SubjectType;

    fn table(&self) -> &str;

    fn primary_key(&self) -> &str {
        "id"
    }

    /// Whether changes to `field_key` are recorded at all.
    fn tracks_field(&self, _field_key: &str) -> bool {
        true
    }

    fn revision_creations_enabled(&self) -> bool {
        false
    }
}

pub trait TypeRegistry: Send + Sync {
    fn definition(&self, type_name: &str) -> Option<Arc<dyn SubjectDefinition>>;
}
