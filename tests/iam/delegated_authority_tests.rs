use std::time::Duration;

use cursos_api::iam::{
    domain::model::enums::auth_error::AuthError,
    interfaces::acl::token_gate_facade::TokenGateFacade,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

use crate::support::{at, create_delegated_gate};

async fn authority_answering(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/validar-token"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

fn endpoint(server: &MockServer) -> String {
    format!("{}/validar-token", server.uri())
}

#[tokio::test]
async fn endorsement_with_string_body_resolves_identity() {
    let server = authority_answering(ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 200,
        "body": "{\"tenant_id\":\"t1\",\"user_id\":\"u1\"}"
    })))
    .await;
    let gate = create_delegated_gate(
        endpoint(&server),
        at("2025-06-01T12:00:00Z"),
        Duration::from_secs(2),
    );

    let identity = gate
        .authenticate(Some("Bearer abc123"))
        .await
        .expect("endorsed token should resolve");

    assert_eq!(identity.tenant_id().as_str(), "t1");
    assert_eq!(identity.user_id().as_str(), "u1");
}

#[tokio::test]
async fn endorsement_with_object_body_resolves_identity() {
    let server = authority_answering(ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 200,
        "body": { "tenant_id": "t2", "user_id": "u9" }
    })))
    .await;
    let gate = create_delegated_gate(
        endpoint(&server),
        at("2025-06-01T12:00:00Z"),
        Duration::from_secs(2),
    );

    let identity = gate
        .authenticate(Some("abc123"))
        .await
        .expect("endorsed token should resolve");

    assert_eq!(identity.tenant_id().as_str(), "t2");
}

#[tokio::test]
async fn credential_is_forwarded_as_authorization_header_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/validar-token"))
        .and(body_json(json!({ "headers": { "Authorization": "Bearer abc123" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "body": "{\"tenant_id\":\"t1\",\"user_id\":\"u1\"}"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let gate = create_delegated_gate(
        endpoint(&server),
        at("2025-06-01T12:00:00Z"),
        Duration::from_secs(2),
    );

    assert!(gate.authenticate(Some("  Bearer abc123  ")).await.is_ok());
}

#[tokio::test]
async fn envelope_rejection_is_not_found() {
    let server = authority_answering(ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 403,
        "body": { "message": "Forbidden" }
    })))
    .await;
    let gate = create_delegated_gate(
        endpoint(&server),
        at("2025-06-01T12:00:00Z"),
        Duration::from_secs(2),
    );

    assert_eq!(
        gate.authenticate(Some("Bearer xyz")).await,
        Err(AuthError::NotFound)
    );
}

#[tokio::test]
async fn envelope_server_error_is_unavailable() {
    let server = authority_answering(ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 500,
        "body": { "message": "token store unavailable" }
    })))
    .await;
    let gate = create_delegated_gate(
        endpoint(&server),
        at("2025-06-01T12:00:00Z"),
        Duration::from_secs(2),
    );

    assert!(matches!(
        gate.authenticate(Some("Bearer xyz")).await,
        Err(AuthError::UpstreamUnavailable(_))
    ));
}

#[tokio::test]
async fn http_failure_is_unavailable() {
    let server = authority_answering(ResponseTemplate::new(502)).await;
    let gate = create_delegated_gate(
        endpoint(&server),
        at("2025-06-01T12:00:00Z"),
        Duration::from_secs(2),
    );

    assert!(matches!(
        gate.authenticate(Some("Bearer xyz")).await,
        Err(AuthError::UpstreamUnavailable(_))
    ));
}

#[tokio::test]
async fn endorsement_with_unparseable_body_is_malformed() {
    let server = authority_answering(ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 200,
        "body": "not json"
    })))
    .await;
    let gate = create_delegated_gate(
        endpoint(&server),
        at("2025-06-01T12:00:00Z"),
        Duration::from_secs(2),
    );

    assert!(matches!(
        gate.authenticate(Some("Bearer abc123")).await,
        Err(AuthError::Malformed(_))
    ));
}

#[tokio::test]
async fn endorsement_without_body_is_malformed() {
    let server = authority_answering(ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 200
    })))
    .await;
    let gate = create_delegated_gate(
        endpoint(&server),
        at("2025-06-01T12:00:00Z"),
        Duration::from_secs(2),
    );

    assert!(matches!(
        gate.authenticate(Some("Bearer abc123")).await,
        Err(AuthError::Malformed(_))
    ));
}

#[tokio::test]
async fn endorsement_without_tenant_is_malformed() {
    let server = authority_answering(ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 200,
        "body": "{\"tenant_id\":\"\",\"user_id\":\"u1\"}"
    })))
    .await;
    let gate = create_delegated_gate(
        endpoint(&server),
        at("2025-06-01T12:00:00Z"),
        Duration::from_secs(2),
    );

    assert!(matches!(
        gate.authenticate(Some("Bearer abc123")).await,
        Err(AuthError::Malformed(_))
    ));
}

#[tokio::test]
async fn endorsement_with_past_expiry_is_expired() {
    let server = authority_answering(ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 200,
        "body": {
            "tenant_id": "t1",
            "user_id": "u1",
            "expires": "2000-01-01T00:00:00Z"
        }
    })))
    .await;
    let gate = create_delegated_gate(
        endpoint(&server),
        at("2025-06-01T12:00:00Z"),
        Duration::from_secs(2),
    );

    assert_eq!(
        gate.authenticate(Some("Bearer abc123")).await,
        Err(AuthError::Expired)
    );
}

#[tokio::test]
async fn slow_authority_is_unavailable() {
    let server = authority_answering(
        ResponseTemplate::new(200)
            .set_body_json(json!({ "statusCode": 200, "body": "{}" }))
            .set_delay(Duration::from_secs(5)),
    )
    .await;
    let gate = create_delegated_gate(
        endpoint(&server),
        at("2025-06-01T12:00:00Z"),
        Duration::from_millis(200),
    );

    assert!(matches!(
        gate.authenticate(Some("Bearer abc123")).await,
        Err(AuthError::UpstreamUnavailable(_))
    ));
}
