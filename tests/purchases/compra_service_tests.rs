use cursos_api::{
    purchases::domain::{
        model::{
            commands::create_compra_command::CreateCompraCommand,
            enums::purchases_domain_error::PurchasesDomainError,
            queries::list_compras_query::ListComprasQuery,
        },
        services::{
            compra_command_service::CompraCommandService, compra_query_service::CompraQueryService,
        },
    },
    shared::domain::model::value_objects::page_cursor::PageCursor,
};

use crate::support::{at, compra, create_purchases_harness, identity};

#[tokio::test]
async fn create_records_buyer_and_tenant_from_identity() {
    let now = at("2025-06-01T12:00:00Z");
    let harness = create_purchases_harness(Vec::new(), now);
    let command = CreateCompraCommand::new(
        &identity("t1", "u1"),
        Some("o1".to_string()),
        "c1".to_string(),
        2,
        39.5,
    )
    .expect("valid command");

    let created = harness
        .command_service
        .handle_create(command)
        .await
        .expect("create should succeed");

    assert_eq!(created.tenant_id().as_str(), "t1");
    assert_eq!(created.user_id().as_str(), "u1");
    assert_eq!(created.created_at(), now);
    assert_eq!(harness.repository.all(), vec![created]);
}

#[tokio::test]
async fn missing_order_id_is_generated() {
    let harness = create_purchases_harness(Vec::new(), at("2025-06-01T12:00:00Z"));
    let command = CreateCompraCommand::new(&identity("t1", "u1"), None, "c1".to_string(), 1, 0.0)
        .expect("valid command");

    let created = harness
        .command_service
        .handle_create(command)
        .await
        .expect("create should succeed");

    assert!(!created.order_id().value().is_empty());
}

#[tokio::test]
async fn duplicate_order_id_conflicts_only_within_tenant() {
    let harness =
        create_purchases_harness(vec![compra("t1", "o1", "u1")], at("2025-06-01T12:00:00Z"));

    let same_tenant =
        CreateCompraCommand::new(&identity("t1", "u2"), Some("o1".to_string()), "c1".to_string(), 1, 1.0)
            .expect("valid command");
    assert!(matches!(
        harness.command_service.handle_create(same_tenant).await,
        Err(PurchasesDomainError::CompraAlreadyExists)
    ));

    let other_tenant =
        CreateCompraCommand::new(&identity("t2", "u2"), Some("o1".to_string()), "c1".to_string(), 1, 1.0)
            .expect("valid command");
    assert!(harness.command_service.handle_create(other_tenant).await.is_ok());
}

#[test]
fn invalid_quantity_and_price_are_rejected() {
    let caller = identity("t1", "u1");

    assert!(matches!(
        CreateCompraCommand::new(&caller, None, "c1".to_string(), 0, 1.0),
        Err(PurchasesDomainError::InvalidQuantity)
    ));
    assert!(matches!(
        CreateCompraCommand::new(&caller, None, "c1".to_string(), 1, -0.01),
        Err(PurchasesDomainError::InvalidPrice)
    ));
    assert!(matches!(
        CreateCompraCommand::new(&caller, None, "c1".to_string(), 1, f64::NAN),
        Err(PurchasesDomainError::InvalidPrice)
    ));
}

#[tokio::test]
async fn list_is_tenant_scoped_and_filters_by_buyer() {
    let harness = create_purchases_harness(
        vec![
            compra("t1", "o1", "u1"),
            compra("t1", "o2", "u2"),
            compra("t1", "o3", "u1"),
            compra("t2", "o4", "u1"),
        ],
        at("2025-06-01T12:00:00Z"),
    );
    let caller = identity("t1", "u9");

    let all = harness
        .query_service
        .handle_list(ListComprasQuery::new(&caller, None, None, None).expect("query"))
        .await
        .expect("list");
    let orders: Vec<&str> = all.items.iter().map(|c| c.order_id().value()).collect();
    assert_eq!(orders, vec!["o1", "o2", "o3"]);

    let by_buyer = harness
        .query_service
        .handle_list(
            ListComprasQuery::new(&caller, Some("u1".to_string()), None, None).expect("query"),
        )
        .await
        .expect("list");
    let orders: Vec<&str> = by_buyer.items.iter().map(|c| c.order_id().value()).collect();
    assert_eq!(orders, vec!["o1", "o3"]);
    assert_eq!(harness.repository.queried_tenants(), vec!["t1", "t1"]);
}

#[tokio::test]
async fn list_pages_with_cursor() {
    let harness = create_purchases_harness(
        vec![compra("t1", "o1", "u1"), compra("t1", "o2", "u1")],
        at("2025-06-01T12:00:00Z"),
    );
    let caller = identity("t1", "u1");

    let first = harness
        .query_service
        .handle_list(ListComprasQuery::new(&caller, None, Some(1), None).expect("query"))
        .await
        .expect("first page");
    let cursor = first.next_cursor.expect("more rows remain");

    let second = harness
        .query_service
        .handle_list(ListComprasQuery::new(&caller, None, Some(1), Some(cursor)).expect("query"))
        .await
        .expect("second page");

    assert_eq!(second.items[0].order_id().value(), "o2");
    assert!(second.next_cursor.is_none());
}

#[test]
fn foreign_cursor_is_rejected() {
    let result = ListComprasQuery::new(
        &identity("t1", "u1"),
        None,
        None,
        Some(PageCursor::encode("t2", "o1")),
    );

    assert!(matches!(result, Err(PurchasesDomainError::InvalidCursor)));
}
