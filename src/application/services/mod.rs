// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::revisions::RevisionCommandService,
        ports::{record_store::RecordStore, settings::SettingsSource, time::Clock},
        queries::revisions::RevisionQueryService,
        resolver::{RevisionValueResolver, UserTypeKeys},
    },
    domain::{registry::TypeRegistry, revision::RevisionRepository},
};

pub struct ApplicationServices {
    pub revision_commands: Arc<RevisionCommandService>,
    pub revision_queries: Arc<RevisionQueryService>,
    resolver: Arc<RevisionValueResolver>,
    registry: Arc<dyn TypeRegistry>,
}

impl ApplicationServices {
    pub fn new(
        revision_repo: Arc<dyn RevisionRepository>,
        registry: Arc<dyn TypeRegistry>,
        record_store: Arc<dyn RecordStore>,
        settings: Arc<dyn SettingsSource>,
        user_type_keys: UserTypeKeys,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let resolver = Arc::new(RevisionValueResolver::new(
            Arc::clone(&registry),
            Arc::clone(&record_store),
            Arc::clone(&settings),
            user_type_keys,
        ));

        let revision_commands = Arc::new(RevisionCommandService::new(
            Arc::clone(&revision_repo),
            Arc::clone(&registry),
            Arc::clone(&clock),
        ));

        let revision_queries = Arc::new(RevisionQueryService::new(
            Arc::clone(&revision_repo),
            Arc::clone(&resolver),
        ));

        Self {
            revision_commands,
            revision_queries,
            resolver,
            registry,
        }
    }

    pub fn resolver(&self) -> Arc<RevisionValueResolver> {
        Arc::clone(&self.resolver)
    }

    pub fn registry(&self) -> Arc<dyn TypeRegistry> {
        Arc::clone(&self.registry)
    }
}
