// tests/support/helpers.rs
use super::builders::{blog_registry, blog_store, user_settings};
use super::mocks::{FixedClock, InMemoryRecordStore, InMemoryRevisionRepo};
use axum::body::{self, Body};
use axum::http::Response;
use revisionable_core::application::resolver::{RevisionValueResolver, UserTypeKeys};
use revisionable_core::application::services::ApplicationServices;
use revisionable_core::presentation::http::state::HttpState;
use serde_json::Value;
use std::sync::Arc;

pub fn blog_resolver() -> RevisionValueResolver {
    resolver_with(blog_store())
}

pub fn resolver_with(store: InMemoryRecordStore) -> RevisionValueResolver {
    RevisionValueResolver::new(
        Arc::new(blog_registry()),
        Arc::new(store),
        Arc::new(user_settings()),
        UserTypeKeys::default(),
    )
}

pub fn build_services(repo: InMemoryRevisionRepo) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        Arc::new(repo),
        Arc::new(blog_registry()),
        Arc::new(blog_store()),
        Arc::new(user_settings()),
        UserTypeKeys::default(),
        Arc::new(FixedClock),
    ))
}

pub fn make_test_router(repo: InMemoryRevisionRepo) -> axum::Router {
    let state = HttpState::new(build_services(repo), &["*".to_string()]);
    revisionable_core::presentation::http::routes::build_router(state)
}

/// レスポンスボディを JSON として読み出す
pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
