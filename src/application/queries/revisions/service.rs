use std::sync::Arc;

use crate::{application::resolver::RevisionValueResolver, domain::revision::RevisionRepository};

pub struct RevisionQueryService {
    pub(super) repo: Arc<dyn RevisionRepository>,
    pub(super) resolver: Arc<RevisionValueResolver>,
}

impl RevisionQueryService {
    pub fn new(repo: Arc<dyn RevisionRepository>, resolver: Arc<RevisionValueResolver>) -> Self {
        Self { repo, resolver }
    }
}
