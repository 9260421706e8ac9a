use cursos_api::search::{
    domain::{
        model::entities::{course_change::CourseChange, sync_outcome::SyncOutcome},
        services::search_index_sync_service::SearchIndexSyncService,
    },
    interfaces::stream::assemblers::course_change_assembler::to_changes,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

use crate::support::{change_batch, create_sync_service, typed_image};

#[tokio::test]
async fn insert_writes_tenant_qualified_document() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/cursos/_doc/t1:c1"))
        .and(query_param("refresh", "true"))
        .and(body_json(json!({
            "tenant_id": "t1",
            "curso_id": "c1",
            "nombre": "Rust",
            "precio": 49.9,
            "categories": ["programacion"]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let service = create_sync_service(&server.uri());
    let batch = change_batch(json!([
        { "eventName": "INSERT", "dynamodb": { "NewImage": typed_image("t1", "c1", "Rust") } }
    ]));

    let outcome = service.handle_apply(to_changes(batch)).await;

    assert_eq!(
        outcome,
        SyncOutcome {
            applied: 1,
            skipped: 0,
            failed: 0
        }
    );
}

#[tokio::test]
async fn remove_of_missing_document_counts_as_applied() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/cursos/_doc/t1:c1"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    let service = create_sync_service(&server.uri());
    let batch = change_batch(json!([
        { "eventName": "REMOVE", "dynamodb": { "OldImage": typed_image("t1", "c1", "Rust") } }
    ]));

    let outcome = service.handle_apply(to_changes(batch)).await;

    assert_eq!(outcome.applied, 1);
    assert_eq!(outcome.failed, 0);
}

#[tokio::test]
async fn one_bad_record_does_not_stop_the_batch() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/cursos/_doc/t1:broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/cursos/_doc/t1:c2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let service = create_sync_service(&server.uri());
    let batch = change_batch(json!([
        { "eventName": "MODIFY", "dynamodb": { "NewImage": typed_image("t1", "broken", "Roto") } },
        { "eventName": "INSERT", "dynamodb": { "NewImage": { "curso_id": { "S": "no-tenant" } } } },
        { "eventName": "INSERT", "dynamodb": {} },
        { "eventName": "INSERT", "dynamodb": { "NewImage": typed_image("t1", "c2", "Go") } }
    ]));

    let outcome = service.handle_apply(to_changes(batch)).await;

    assert_eq!(
        outcome,
        SyncOutcome {
            applied: 1,
            skipped: 2,
            failed: 1
        }
    );
}

#[test]
fn unknown_events_are_unusable() {
    let changes = to_changes(change_batch(json!([
        { "eventName": "TRUNCATE", "dynamodb": {} }
    ])));

    assert!(matches!(changes.as_slice(), [CourseChange::Unusable(_)]));
}

#[tokio::test]
async fn unreachable_index_fails_every_write() {
    let service = create_sync_service("http://127.0.0.1:9");
    let batch = change_batch(json!([
        { "eventName": "INSERT", "dynamodb": { "NewImage": typed_image("t1", "c1", "Rust") } },
        { "eventName": "REMOVE", "dynamodb": { "OldImage": typed_image("t1", "c2", "Go") } }
    ]));

    let outcome = service.handle_apply(to_changes(batch)).await;

    assert_eq!(outcome.failed, 2);
    assert_eq!(outcome.applied, 0);
}
