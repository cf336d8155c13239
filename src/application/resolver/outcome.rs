// src/application/resolver/outcome.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Which step of resolution produced a display value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    /// Subject type is not registered; stored value returned untouched.
    Raw,
    Scalar,
    Mutator,
    NullPlaceholder,
    UnknownPlaceholder,
    RelatedName,
}

/// Why a relation key fell back to scalar handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationFallback {
    #[error("relation '{0}' is not defined on the subject type")]
    RelationNotFound(String),
    #[error("related type '{0}' is not registered")]
    UnresolvableRelatedType(String),
    #[error("related record lookup failed: {0}")]
    LookupFailed(String),
    #[error("related type '{0}' exposes no identifiable name")]
    NotIdentifiable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    pub value: Option<String>,
    pub source: ValueSource,
    pub fallback: Option<RelationFallback>,
}

impl ResolvedValue {
    pub fn new(value: Option<String>, source: ValueSource) -> Self {
        Self {
            value,
            source,
            fallback: None,
        }
    }

    pub fn raw(value: Option<String>) -> Self {
        Self::new(value, ValueSource::Raw)
    }

    pub fn with_fallback(mut self, fallback: Option<RelationFallback>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
