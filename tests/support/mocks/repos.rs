// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::Duration;
use revisionable_core::domain::errors::DomainResult;
use revisionable_core::domain::revision::{
    NewRevision, Revision, RevisionCursor, RevisionId, RevisionRepository, SubjectId, SubjectType,
};
use std::sync::{Arc, Mutex};

use super::time::fixed_now;

/* -------------------------------- InMemoryRevisionRepo -------------------------------- */

/// 挿入順にIDと時刻を採番するインメモリのリビジョンリポジトリ
/// created_at は fixed_now() + id 秒
#[derive(Clone, Default)]
pub struct InMemoryRevisionRepo {
    inner: Arc<Mutex<Vec<Revision>>>,
    append_calls: Arc<Mutex<usize>>,
}

impl InMemoryRevisionRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みの全リビジョンを取得
    pub fn stored(&self) -> Vec<Revision> {
        self.inner.lock().expect("mutex poisoned").clone()
    }

    pub fn append_calls(&self) -> usize {
        *self.append_calls.lock().expect("mutex poisoned")
    }
}

#[async_trait]
impl RevisionRepository for InMemoryRevisionRepo {
    async fn append_many(&self, revisions: Vec<NewRevision>) -> DomainResult<Vec<Revision>> {
        *self.append_calls.lock().expect("mutex poisoned") += 1;
        let mut guard = self.inner.lock().expect("mutex poisoned");
        let mut stored = Vec::with_capacity(revisions.len());
        for revision in revisions {
            let id = guard.len() as i64 + 1;
            let created_at = fixed_now() + Duration::seconds(id);
            let row = Revision {
                id: RevisionId::new(id)?,
                subject_type: revision.subject_type,
                subject_id: revision.subject_id,
                user_id: revision.user_id,
                key: revision.key,
                old_value: revision.old_value,
                new_value: revision.new_value,
                created_at,
                updated_at: created_at,
            };
            guard.push(row.clone());
            stored.push(row);
        }
        Ok(stored)
    }

    async fn find_by_id(&self, id: RevisionId) -> DomainResult<Option<Revision>> {
        let guard = self.inner.lock().expect("mutex poisoned");
        Ok(guard.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_subject(
        &self,
        subject_type: &SubjectType,
        subject_id: SubjectId,
        limit: u32,
        cursor: Option<RevisionCursor>,
    ) -> DomainResult<(Vec<Revision>, Option<String>)> {
        let guard = self.inner.lock().expect("mutex poisoned");
        let mut matching: Vec<Revision> = guard
            .iter()
            .filter(|r| &r.subject_type == subject_type && r.subject_id == subject_id)
            .filter(|r| match &cursor {
                Some(c) => (r.created_at, i64::from(r.id)) < (c.created_at, c.id),
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        let limit = limit as usize;
        let next_cursor = if matching.len() > limit {
            matching.truncate(limit);
            matching
                .last()
                .map(|last| RevisionCursor::new(last.created_at, last.id.into()).encode())
        } else {
            None
        };
        Ok((matching, next_cursor))
    }
}
