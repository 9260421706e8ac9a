use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use validator::Validate;

use crate::{
    iam::interfaces::{
        acl::token_gate_facade::TokenGateFacade,
        rest::guards::token_gate_guard::authenticate_request,
    },
    purchases::{
        domain::{
            model::{
                commands::create_compra_command::CreateCompraCommand, entities::compra::Compra,
                enums::purchases_domain_error::PurchasesDomainError,
                queries::list_compras_query::ListComprasQuery,
            },
            services::{
                compra_command_service::CompraCommandService,
                compra_query_service::CompraQueryService,
            },
        },
        interfaces::rest::resources::compra_resource::{
            CompraPageResource, CompraResource, CreateCompraRequestResource,
            ListComprasQueryResource,
        },
    },
    shared::interfaces::rest::resources::error_response_resource::{
        ErrorResponseResource, RestError, rest_error,
    },
};

#[derive(Clone)]
pub struct CompraRestControllerState {
    pub command_service: Arc<dyn CompraCommandService>,
    pub query_service: Arc<dyn CompraQueryService>,
    pub token_gate: Arc<dyn TokenGateFacade>,
}

pub fn router(state: CompraRestControllerState) -> Router {
    Router::new()
        .route("/compras", get(list_compras).post(create_compra))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/compras",
    tag = "compras",
    security(("bearerAuth" = [])),
    request_body = CreateCompraRequestResource,
    responses(
        (status = 201, description = "Compra recorded", body = CompraResource),
        (status = 400, description = "Invalid request", body = ErrorResponseResource),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource),
        (status = 409, description = "Order already exists", body = ErrorResponseResource),
        (status = 503, description = "Token validation unavailable", body = ErrorResponseResource)
    )
)]
pub async fn create_compra(
    State(state): State<CompraRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<CreateCompraRequestResource>,
) -> Result<(StatusCode, Json<CompraResource>), RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;

    if let Err(validation_error) = request.validate() {
        return Err(rest_error(StatusCode::BAD_REQUEST, validation_error.to_string()));
    }

    let command = CreateCompraCommand::new(
        &identity,
        request.order_id,
        request.curso_id,
        request.quantity,
        request.price,
    )
    .map_err(map_domain_error)?;

    let compra = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_resource(&compra))))
}

#[utoipa::path(
    get,
    path = "/compras",
    tag = "compras",
    security(("bearerAuth" = [])),
    params(
        ("user_id" = Option<String>, Query, description = "Only this buyer's orders"),
        ("limit" = Option<u32>, Query, description = "Page size, 1-100, default 10"),
        ("cursor" = Option<String>, Query, description = "Cursor from a previous page")
    ),
    responses(
        (status = 200, description = "Page of compras", body = CompraPageResource),
        (status = 400, description = "Invalid limit or cursor", body = ErrorResponseResource),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource)
    )
)]
pub async fn list_compras(
    State(state): State<CompraRestControllerState>,
    headers: HeaderMap,
    Query(params): Query<ListComprasQueryResource>,
) -> Result<Json<CompraPageResource>, RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;

    let query = ListComprasQuery::new(&identity, params.user_id, params.limit, params.cursor)
        .map_err(map_domain_error)?;
    let page = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CompraPageResource {
        items: page.items.iter().map(to_resource).collect(),
        next_cursor: page.next_cursor,
    }))
}

fn to_resource(compra: &Compra) -> CompraResource {
    CompraResource {
        tenant_id: compra.tenant_id().to_string(),
        order_id: compra.order_id().value().to_string(),
        user_id: compra.user_id().to_string(),
        curso_id: compra.curso_id().value().to_string(),
        quantity: compra.quantity(),
        price: compra.price(),
        timestamp: compra.created_at().to_rfc3339(),
    }
}

fn map_domain_error(error: PurchasesDomainError) -> RestError {
    let status = match error {
        PurchasesDomainError::InvalidOrderId
        | PurchasesDomainError::InvalidCursoId
        | PurchasesDomainError::InvalidUserId
        | PurchasesDomainError::InvalidQuantity
        | PurchasesDomainError::InvalidPrice
        | PurchasesDomainError::InvalidPageLimit(_)
        | PurchasesDomainError::InvalidCursor => StatusCode::BAD_REQUEST,
        PurchasesDomainError::CompraAlreadyExists => StatusCode::CONFLICT,
        PurchasesDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if let PurchasesDomainError::InfrastructureError(detail) = &error {
        tracing::error!(%detail, "purchases request failed");
    }

    rest_error(status, error.to_string())
}
