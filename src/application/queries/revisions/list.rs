use super::{RevisionQueryService, common};
use crate::{
    application::{
        dto::{CursorPage, RevisionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::revision::{RevisionCursor, RevisionId, SubjectId, SubjectType},
};

pub struct ListSubjectRevisionsQuery {
    pub subject_type: String,
    pub subject_id: i64,
    pub limit: u32,
    pub cursor: Option<String>,
}

pub struct GetRevisionQuery {
    pub id: i64,
}

impl RevisionQueryService {
    pub async fn list_for_subject(
        &self,
        query: ListSubjectRevisionsQuery,
    ) -> ApplicationResult<CursorPage<RevisionDto>> {
        let subject_type = SubjectType::new(query.subject_type)?;
        let subject_id = SubjectId::new(query.subject_id)?;
        let limit = common::normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(RevisionCursor::decode)
            .transpose()?;

        let (items, next_cursor) = self
            .repo
            .list_by_subject(&subject_type, subject_id, limit, cursor)
            .await
            .map_err(ApplicationError::from)?;

        let mut dtos = Vec::with_capacity(items.len());
        for revision in items {
            dtos.push(self.present(revision).await);
        }
        Ok(CursorPage::new(dtos, next_cursor))
    }

    pub async fn get_revision(&self, query: GetRevisionQuery) -> ApplicationResult<RevisionDto> {
        let id = RevisionId::new(query.id)?;
        let revision = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("revision not found"))?;

        Ok(self.present(revision).await)
    }
}
