// src/application/commands/revisions/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{registry::TypeRegistry, revision::RevisionRepository},
};

pub struct RevisionCommandService {
    pub(super) repo: Arc<dyn RevisionRepository>,
    pub(super) registry: Arc<dyn TypeRegistry>,
    pub(super) clock: Arc<dyn Clock>,
}

impl RevisionCommandService {
    pub fn new(
        repo: Arc<dyn RevisionRepository>,
        registry: Arc<dyn TypeRegistry>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            registry,
            clock,
        }
    }
}
