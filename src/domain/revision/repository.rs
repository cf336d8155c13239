// src/domain/revision/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::revision::{
    cursor::RevisionCursor,
    entity::{NewRevision, Revision},
    value_objects::{RevisionId, SubjectId, SubjectType},
};
use async_trait::async_trait;

#[async_trait]
pub trait RevisionRepository: Send + Sync {
    /// Insert all revisions atomically, returning them in input order.
    async fn append_many(&self, revisions: Vec<NewRevision>) -> DomainResult<Vec<Revision>>;

    async fn find_by_id(&self, id: RevisionId) -> DomainResult<Option<Revision>>;

    /// Newest first. The second element is the cursor of the next page, if any.
    async fn list_by_subject(
        &self,
        subject_type: &SubjectType,
        subject_id: SubjectId,
        limit: u32,
        cursor: Option<RevisionCursor>,
    ) -> DomainResult<(Vec<Revision>, Option<String>)>;
}
