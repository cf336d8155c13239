use super::RevisionQueryService;
use crate::{
    application::{dto::RevisionDto, resolver::RevisionValueResolver},
    domain::revision::{Revision, ValueSide},
};

pub(super) fn normalize_limit(limit: u32) -> u32 {
    const DEFAULT_LIMIT: u32 = 20;
    const MAX_LIMIT: u32 = 100;

    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}

impl RevisionQueryService {
    /// Resolve both sides and the responsible user of a stored revision.
    pub async fn present(&self, revision: Revision) -> RevisionDto {
        build_dto(&self.resolver, revision).await
    }
}

async fn build_dto(resolver: &RevisionValueResolver, revision: Revision) -> RevisionDto {
    let old = resolver.resolve_value(&revision, ValueSide::Old).await;
    let new = resolver.resolve_value(&revision, ValueSide::New).await;
    let user = resolver.responsible_user(&revision).await.map(Into::into);

    RevisionDto {
        id: revision.id.into(),
        subject_type: revision.subject_type.to_string(),
        subject_id: revision.subject_id.into(),
        user_id: revision.user_id.map(Into::into),
        field_name: resolver.field_name(&revision),
        key: revision.key.to_string(),
        old_display: old.value,
        new_display: new.value,
        old_source: old.source,
        new_source: new.source,
        old_value: revision.old_value,
        new_value: revision.new_value,
        user,
        created_at: revision.created_at,
    }
}
