// src/application/ports/record_store.rs
use crate::domain::{
    errors::DomainResult,
    registry::{Record, SubjectDefinition},
    user::UserId,
};
use async_trait::async_trait;

/// Read access to the host application's rows.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// `Ok(None)` when no row of that type carries `id`.
    async fn find_by_type_and_id(
        &self,
        definition: &dyn SubjectDefinition,
        id: &str,
    ) -> DomainResult<Option<Record>>;

    async fn find_user(
        &self,
        user_definition: &dyn SubjectDefinition,
        id: UserId,
    ) -> DomainResult<Option<Record>> {
        self.find_by_type_and_id(user_definition, &id.to_string())
            .await
    }
}
