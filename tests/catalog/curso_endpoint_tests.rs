use std::sync::Arc;

use cursos_api::shared::domain::model::value_objects::page_cursor::PageCursor;
use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::support::{FakeCursoRepository, FakeTokenGate, curso, identity, spawn_catalog_api};

async fn api_with(repository: Arc<FakeCursoRepository>) -> String {
    let gate = FakeTokenGate::with_tokens(vec![
        ("tok-t1", identity("t1", "u1")),
        ("tok-t2", identity("t2", "u2")),
    ]);
    spawn_catalog_api(repository, Arc::new(gate)).await
}

#[tokio::test]
async fn requests_without_token_are_401() {
    let base = api_with(Arc::new(FakeCursoRepository::new())).await;

    let response = reqwest::get(format!("{base}/cursos"))
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_token_is_403() {
    let base = api_with(Arc::new(FakeCursoRepository::new())).await;

    let response = reqwest::Client::new()
        .get(format!("{base}/cursos"))
        .bearer_auth("nope")
        .send()
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unavailable_gate_is_503() {
    let base = spawn_catalog_api(
        Arc::new(FakeCursoRepository::new()),
        Arc::new(FakeTokenGate::unavailable()),
    )
    .await;

    let response = reqwest::Client::new()
        .get(format!("{base}/cursos"))
        .bearer_auth("tok-t1")
        .send()
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn create_ignores_tenant_in_body() {
    let repository = Arc::new(FakeCursoRepository::new());
    let base = api_with(repository.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/cursos"))
        .bearer_auth("tok-t1")
        .json(&json!({
            "tenant_id": "t2",
            "curso_id": "c1",
            "nombre": "Rust",
            "precio": 10.0,
            "categories": ["programacion"]
        }))
        .send()
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["tenant_id"], "t1");
    assert!(repository.stored("t1", "c1").is_some());
    assert!(repository.stored("t2", "c1").is_none());
}

#[tokio::test]
async fn duplicate_create_is_409_and_invalid_body_is_400() {
    let repository = Arc::new(FakeCursoRepository::seeded(vec![curso("t1", "c1", "Rust")]));
    let base = api_with(repository).await;
    let client = reqwest::Client::new();

    let duplicate = client
        .post(format!("{base}/cursos"))
        .bearer_auth("tok-t1")
        .json(&json!({ "curso_id": "c1", "nombre": "Otra" }))
        .send()
        .await
        .expect("request sent");
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let negative = client
        .post(format!("{base}/cursos"))
        .bearer_auth("tok-t1")
        .json(&json!({ "curso_id": "c2", "nombre": "Rust", "precio": -5.0 }))
        .send()
        .await
        .expect("request sent");
    assert_eq!(negative.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn other_tenant_rows_are_invisible() {
    let repository = Arc::new(FakeCursoRepository::seeded(vec![curso("t1", "c1", "Rust")]));
    let base = api_with(repository).await;
    let client = reqwest::Client::new();

    let own = client
        .get(format!("{base}/cursos/c1"))
        .bearer_auth("tok-t1")
        .send()
        .await
        .expect("request sent");
    assert_eq!(own.status(), StatusCode::OK);

    let foreign = client
        .get(format!("{base}/cursos/c1"))
        .bearer_auth("tok-t2")
        .send()
        .await
        .expect("request sent");
    assert_eq!(foreign.status(), StatusCode::NOT_FOUND);

    let listing: Value = client
        .get(format!("{base}/cursos"))
        .bearer_auth("tok-t2")
        .send()
        .await
        .expect("request sent")
        .json()
        .await
        .expect("json body");
    assert_eq!(listing["items"], json!([]));
    assert!(listing.get("next_cursor").is_none());
}

#[tokio::test]
async fn listing_follows_cursor_and_rejects_foreign_one() {
    let repository = Arc::new(FakeCursoRepository::seeded(vec![
        curso("t1", "a", "Uno"),
        curso("t1", "b", "Dos"),
    ]));
    let base = api_with(repository).await;
    let client = reqwest::Client::new();

    let first: Value = client
        .get(format!("{base}/cursos?limit=1"))
        .bearer_auth("tok-t1")
        .send()
        .await
        .expect("request sent")
        .json()
        .await
        .expect("json body");
    let cursor = first["next_cursor"].as_str().expect("cursor").to_string();

    let second: Value = client
        .get(format!("{base}/cursos"))
        .query(&[("limit", "1"), ("cursor", cursor.as_str())])
        .bearer_auth("tok-t1")
        .send()
        .await
        .expect("request sent")
        .json()
        .await
        .expect("json body");
    assert_eq!(second["items"][0]["curso_id"], "b");

    let foreign = client
        .get(format!("{base}/cursos"))
        .query(&[("cursor", PageCursor::encode("t2", "a"))])
        .bearer_auth("tok-t1")
        .send()
        .await
        .expect("request sent");
    assert_eq!(foreign.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn put_ignores_fields_outside_the_revision() {
    let repository = Arc::new(FakeCursoRepository::seeded(vec![curso("t1", "c1", "Rust")]));
    let base = api_with(repository.clone()).await;

    let response = reqwest::Client::new()
        .put(format!("{base}/cursos/c1"))
        .bearer_auth("tok-t1")
        .json(&json!({
            "nombre": "Rust 2",
            "descripcion": "desde cero",
            "duracion": "8h",
            "precio": 1.0,
            "categories": []
        }))
        .send()
        .await
        .expect("request sent");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["nombre"], "Rust 2");
    assert_eq!(body["duracion"], "8h");
    assert_eq!(body["precio"], 49.9);

    let stored = repository.stored("t1", "c1").expect("still stored");
    assert_eq!(stored.details().precio, Some(49.9));
    assert_eq!(stored.details().categories, vec!["programacion".to_string()]);
}
