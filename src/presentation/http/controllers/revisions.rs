// src/presentation/http/controllers/revisions.rs
use crate::application::{
    commands::revisions::RecordChangesCommand,
    dto::{CursorPage, RevisionDto},
    queries::revisions::{GetRevisionQuery, ListSubjectRevisionsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct RevisionListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordChangesRequest {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub before: Map<String, Value>,
    #[schema(value_type = Object)]
    pub after: Map<String, Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RevisionListResponse {
    pub items: Vec<RevisionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl From<CursorPage<RevisionDto>> for RevisionListResponse {
    fn from(page: CursorPage<RevisionDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/revisions/{id}",
    params(("id" = i64, Path, description = "Revision id")),
    responses(
        (status = 200, description = "Revision with resolved values.", body = RevisionDto),
        (status = 404, description = "Revision not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Revisions"
)]
pub async fn get_revision(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<RevisionDto>> {
    state
        .services
        .revision_queries
        .get_revision(GetRevisionQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/subjects/{subject_type}/{subject_id}/revisions",
    params(
        ("subject_type" = String, Path, description = "Registered subject type"),
        ("subject_id" = i64, Path, description = "Subject record id"),
        RevisionListParams
    ),
    responses(
        (status = 200, description = "Revision history, newest first.", body = RevisionListResponse),
        (status = 400, description = "Invalid subject or cursor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Revisions"
)]
pub async fn list_subject_revisions(
    Extension(state): Extension<HttpState>,
    Path((subject_type, subject_id)): Path<(String, i64)>,
    Query(params): Query<RevisionListParams>,
) -> HttpResult<Json<RevisionListResponse>> {
    let page = state
        .services
        .revision_queries
        .list_for_subject(ListSubjectRevisionsQuery {
            subject_type,
            subject_id,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()?;

    Ok(Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/subjects/{subject_type}/{subject_id}/revisions",
    params(
        ("subject_type" = String, Path, description = "Registered subject type"),
        ("subject_id" = i64, Path, description = "Subject record id")
    ),
    request_body = RecordChangesRequest,
    responses(
        (status = 201, description = "Revisions recorded for changed attributes.", body = [RevisionDto]),
        (status = 400, description = "Unknown subject type or invalid ids.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Revisions"
)]
pub async fn record_subject_changes(
    Extension(state): Extension<HttpState>,
    Path((subject_type, subject_id)): Path<(String, i64)>,
    Json(payload): Json<RecordChangesRequest>,
) -> HttpResult<(StatusCode, Json<Vec<RevisionDto>>)> {
    let command = RecordChangesCommand {
        subject_type,
        subject_id,
        user_id: payload.user_id,
        before: payload.before,
        after: payload.after,
    };

    let stored = state
        .services
        .revision_commands
        .record_changes(command)
        .await
        .into_http()?;

    let mut items = Vec::with_capacity(stored.len());
    for revision in stored {
        items.push(state.services.revision_queries.present(revision).await);
    }

    Ok((StatusCode::CREATED, Json(items)))
}
