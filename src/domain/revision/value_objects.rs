// src/domain/revision/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix marking a field key as a foreign-key reference (`categoryId`).
pub const RELATION_SUFFIX: &str = "Id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevisionId(pub i64);

impl RevisionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("revision id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RevisionId> for i64 {
    fn from(value: RevisionId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectId(pub i64);

impl SubjectId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("subject id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SubjectId> for i64 {
    fn from(value: SubjectId) -> Self {
        value.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name under which a tracked model is registered (`Post`, `App\\Models\\Post`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectType(String);

impl SubjectType {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("subject type cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubjectType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SubjectType> for String {
    fn from(value: SubjectType) -> Self {
        value.0
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Column name of a changed field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey(String);

impl FieldKey {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("field key cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the key ends with [`RELATION_SUFFIX`] and has something in front of it.
    pub fn is_relation(&self) -> bool {
        self.0.len() > RELATION_SUFFIX.len() && self.0.ends_with(RELATION_SUFFIX)
    }

    /// Relation name addressed by this key, i.e. the key minus one trailing suffix.
    pub fn relation_name(&self) -> Option<&str> {
        if self.is_relation() {
            self.0.strip_suffix(RELATION_SUFFIX)
        } else {
            None
        }
    }

    /// Display name of the field. Every trailing suffix is removed, but the
    /// result never becomes empty, so applying it to its own output is a no-op.
    pub fn field_name(&self) -> String {
        let mut name = self.0.as_str();
        while let Some(stripped) = name.strip_suffix(RELATION_SUFFIX) {
            if stripped.is_empty() {
                break;
            }
            name = stripped;
        }
        name.to_string()
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side of a change record to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSide {
    Old,
    New,
}

impl ValueSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSide::Old => "old",
            ValueSide::New => "new",
        }
    }
}

impl fmt::Display for ValueSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
