use revisionable_core::application::commands::revisions::RecordChangesCommand;
use revisionable_core::application::error::ApplicationError;
use revisionable_core::application::queries::revisions::{
    GetRevisionQuery, ListSubjectRevisionsQuery,
};
use revisionable_core::application::resolver::ValueSource;
use serde_json::{Map, Value, json};

mod support;
use support::{InMemoryRevisionRepo, build_services};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

async fn seed_post_history(services: &revisionable_core::application::services::ApplicationServices) {
    let edits = [
        (json!({"categoryId": null}), json!({"categoryId": 3})),
        (json!({"title": "Hello"}), json!({"title": "Hello again"})),
        (json!({"status": "draft"}), json!({"status": "live"})),
    ];
    for (before, after) in edits {
        services
            .revision_commands
            .record_changes(RecordChangesCommand {
                subject_type: "Post".into(),
                subject_id: 1,
                user_id: Some(7),
                before: object(before),
                after: object(after),
            })
            .await
            .expect("seed revision");
    }
}

#[tokio::test]
async fn list_for_subject_pages_newest_first() {
    let services = build_services(InMemoryRevisionRepo::new());
    seed_post_history(&services).await;

    let first = services
        .revision_queries
        .list_for_subject(ListSubjectRevisionsQuery {
            subject_type: "Post".into(),
            subject_id: 1,
            limit: 2,
            cursor: None,
        })
        .await
        .expect("first page");

    assert_eq!(first.items.len(), 2);
    assert!(first.has_more);
    assert_eq!(first.items[0].key, "status");
    assert_eq!(first.items[1].key, "title");

    let second = services
        .revision_queries
        .list_for_subject(ListSubjectRevisionsQuery {
            subject_type: "Post".into(),
            subject_id: 1,
            limit: 2,
            cursor: first.next_cursor.clone(),
        })
        .await
        .expect("second page");

    assert_eq!(second.items.len(), 1);
    assert!(!second.has_more);
    let category = &second.items[0];
    assert_eq!(category.key, "categoryId");
    assert_eq!(category.field_name, "category");
    assert_eq!(category.old_display.as_deref(), Some("No category"));
    assert_eq!(category.old_source, ValueSource::NullPlaceholder);
    assert_eq!(category.new_display.as_deref(), Some("News"));
    assert_eq!(category.new_source, ValueSource::RelatedName);
    assert_eq!(category.user.as_ref().map(|u| u.name.as_str()), Some("Ada"));
}

#[tokio::test]
async fn get_revision_resolves_display_values() {
    let services = build_services(InMemoryRevisionRepo::new());
    seed_post_history(&services).await;

    let dto = services
        .revision_queries
        .get_revision(GetRevisionQuery { id: 3 })
        .await
        .expect("revision 3 exists");

    assert_eq!(dto.key, "status");
    assert_eq!(dto.old_value.as_deref(), Some("draft"));
    assert_eq!(dto.old_display.as_deref(), Some("DRAFT"));
    assert_eq!(dto.new_display.as_deref(), Some("LIVE"));
}

#[tokio::test]
async fn get_revision_reports_missing_rows() {
    let services = build_services(InMemoryRevisionRepo::new());

    let err = services
        .revision_queries
        .get_revision(GetRevisionQuery { id: 42 })
        .await
        .expect_err("nothing stored");

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn invalid_cursor_is_a_validation_error() {
    let services = build_services(InMemoryRevisionRepo::new());

    let err = services
        .revision_queries
        .list_for_subject(ListSubjectRevisionsQuery {
            subject_type: "Post".into(),
            subject_id: 1,
            limit: 10,
            cursor: Some("%%%".into()),
        })
        .await
        .expect_err("bad cursor");

    assert!(matches!(err, ApplicationError::Domain(_)));
}
