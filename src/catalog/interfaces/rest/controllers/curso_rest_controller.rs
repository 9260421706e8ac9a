use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use validator::Validate;

use crate::{
    catalog::{
        domain::{
            model::{
                commands::{
                    create_curso_command::CreateCursoCommand,
                    delete_curso_command::DeleteCursoCommand,
                    update_curso_command::UpdateCursoCommand,
                },
                entities::curso::Curso,
                enums::catalog_domain_error::CatalogDomainError,
                queries::{
                    get_curso_by_id_query::GetCursoByIdQuery, list_cursos_query::ListCursosQuery,
                    search_cursos_by_category_query::SearchCursosByCategoryQuery,
                    search_cursos_by_name_query::SearchCursosByNameQuery,
                },
            },
            services::{
                curso_command_service::CursoCommandService,
                curso_query_service::CursoQueryService,
            },
        },
        interfaces::rest::resources::{
            curso_page_resource::CursoPageResource,
            curso_query_resource::{
                ListCursosQueryResource, SearchCursosByCategoryQueryResource,
                SearchCursosByNameQueryResource,
            },
            curso_request_resource::{CreateCursoRequestResource, UpdateCursoRequestResource},
            curso_resource::CursoResource,
        },
    },
    iam::interfaces::{
        acl::token_gate_facade::TokenGateFacade,
        rest::guards::token_gate_guard::authenticate_request,
    },
    shared::{
        domain::model::value_objects::page::Page,
        interfaces::rest::resources::error_response_resource::{
            ErrorResponseResource, RestError, rest_error,
        },
    },
};

#[derive(Clone)]
pub struct CursoRestControllerState {
    pub command_service: Arc<dyn CursoCommandService>,
    pub query_service: Arc<dyn CursoQueryService>,
    pub token_gate: Arc<dyn TokenGateFacade>,
}

pub fn router(state: CursoRestControllerState) -> Router {
    Router::new()
        .route("/cursos", get(list_cursos).post(create_curso))
        .route(
            "/cursos/:curso_id",
            get(get_curso).put(update_curso).delete(delete_curso),
        )
        .route("/cursos/buscar/nombre", get(search_cursos_by_name))
        .route("/cursos/buscar/categoria", get(search_cursos_by_category))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/cursos",
    tag = "cursos",
    security(("bearerAuth" = [])),
    request_body = CreateCursoRequestResource,
    responses(
        (status = 201, description = "Curso created", body = CursoResource),
        (status = 400, description = "Invalid request", body = ErrorResponseResource),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource),
        (status = 409, description = "Curso already exists", body = ErrorResponseResource),
        (status = 503, description = "Token validation unavailable", body = ErrorResponseResource)
    )
)]
pub async fn create_curso(
    State(state): State<CursoRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<CreateCursoRequestResource>,
) -> Result<(StatusCode, Json<CursoResource>), RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;
    validate(&request)?;

    let command = CreateCursoCommand::new(&identity, request.curso_id, request.details.into())
        .map_err(map_domain_error)?;

    let curso = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_resource(&curso))))
}

#[utoipa::path(
    get,
    path = "/cursos/{curso_id}",
    tag = "cursos",
    security(("bearerAuth" = [])),
    params(("curso_id" = String, Path, description = "Curso identifier")),
    responses(
        (status = 200, description = "Curso", body = CursoResource),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource),
        (status = 404, description = "Curso not found", body = ErrorResponseResource)
    )
)]
pub async fn get_curso(
    State(state): State<CursoRestControllerState>,
    headers: HeaderMap,
    Path(curso_id): Path<String>,
) -> Result<Json<CursoResource>, RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;

    let query = GetCursoByIdQuery::new(&identity, curso_id).map_err(map_domain_error)?;
    let curso = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_resource(&curso)))
}

#[utoipa::path(
    put,
    path = "/cursos/{curso_id}",
    tag = "cursos",
    security(("bearerAuth" = [])),
    params(("curso_id" = String, Path, description = "Curso identifier")),
    request_body = UpdateCursoRequestResource,
    responses(
        (status = 200, description = "Curso updated", body = CursoResource),
        (status = 400, description = "Invalid request", body = ErrorResponseResource),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource),
        (status = 404, description = "Curso not found", body = ErrorResponseResource)
    )
)]
pub async fn update_curso(
    State(state): State<CursoRestControllerState>,
    headers: HeaderMap,
    Path(curso_id): Path<String>,
    Json(request): Json<UpdateCursoRequestResource>,
) -> Result<Json<CursoResource>, RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;
    validate(&request)?;

    let command =
        UpdateCursoCommand::new(&identity, curso_id, request.into()).map_err(map_domain_error)?;
    let curso = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_resource(&curso)))
}

#[utoipa::path(
    delete,
    path = "/cursos/{curso_id}",
    tag = "cursos",
    security(("bearerAuth" = [])),
    params(("curso_id" = String, Path, description = "Curso identifier")),
    responses(
        (status = 204, description = "Curso deleted"),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource),
        (status = 404, description = "Curso not found", body = ErrorResponseResource)
    )
)]
pub async fn delete_curso(
    State(state): State<CursoRestControllerState>,
    headers: HeaderMap,
    Path(curso_id): Path<String>,
) -> Result<StatusCode, RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;

    let command = DeleteCursoCommand::new(&identity, curso_id).map_err(map_domain_error)?;
    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/cursos",
    tag = "cursos",
    security(("bearerAuth" = [])),
    params(
        ("limit" = Option<u32>, Query, description = "Page size, 1-100, default 10"),
        ("cursor" = Option<String>, Query, description = "Cursor from a previous page")
    ),
    responses(
        (status = 200, description = "Page of cursos", body = CursoPageResource),
        (status = 400, description = "Invalid limit or cursor", body = ErrorResponseResource),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource)
    )
)]
pub async fn list_cursos(
    State(state): State<CursoRestControllerState>,
    headers: HeaderMap,
    Query(params): Query<ListCursosQueryResource>,
) -> Result<Json<CursoPageResource>, RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;

    let query =
        ListCursosQuery::new(&identity, params.limit, params.cursor).map_err(map_domain_error)?;
    let page = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_page_resource(page)))
}

#[utoipa::path(
    get,
    path = "/cursos/buscar/nombre",
    tag = "cursos",
    security(("bearerAuth" = [])),
    params(
        ("name" = String, Query, description = "Case-insensitive fragment of the name"),
        ("limit" = Option<u32>, Query, description = "Page size, 1-100, default 10"),
        ("cursor" = Option<String>, Query, description = "Cursor from a previous page")
    ),
    responses(
        (status = 200, description = "Matching cursos", body = CursoPageResource),
        (status = 400, description = "Missing name, invalid limit or cursor", body = ErrorResponseResource),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource)
    )
)]
pub async fn search_cursos_by_name(
    State(state): State<CursoRestControllerState>,
    headers: HeaderMap,
    Query(params): Query<SearchCursosByNameQueryResource>,
) -> Result<Json<CursoPageResource>, RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;

    let query = SearchCursosByNameQuery::new(&identity, params.name, params.limit, params.cursor)
        .map_err(map_domain_error)?;
    let page = state
        .query_service
        .handle_search_by_name(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_page_resource(page)))
}

#[utoipa::path(
    get,
    path = "/cursos/buscar/categoria",
    tag = "cursos",
    security(("bearerAuth" = [])),
    params(("category" = String, Query, description = "Exact category")),
    responses(
        (status = 200, description = "Cursos in the category", body = [CursoResource]),
        (status = 400, description = "Missing category", body = ErrorResponseResource),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource)
    )
)]
pub async fn search_cursos_by_category(
    State(state): State<CursoRestControllerState>,
    headers: HeaderMap,
    Query(params): Query<SearchCursosByCategoryQueryResource>,
) -> Result<Json<Vec<CursoResource>>, RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;

    let query =
        SearchCursosByCategoryQuery::new(&identity, params.category).map_err(map_domain_error)?;
    let cursos = state
        .query_service
        .handle_search_by_category(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(cursos.iter().map(to_resource).collect()))
}

fn validate(request: &impl Validate) -> Result<(), RestError> {
    request.validate().map_err(|validation_error| {
        rest_error(StatusCode::BAD_REQUEST, validation_error.to_string())
    })
}

fn to_resource(curso: &Curso) -> CursoResource {
    let details = curso.details();
    CursoResource {
        tenant_id: curso.tenant_id().to_string(),
        curso_id: curso.curso_id().value().to_string(),
        nombre: details.nombre.clone(),
        descripcion: details.descripcion.clone(),
        duracion: details.duracion.clone(),
        precio: details.precio,
        rating: details.rating,
        imagen_url: details.imagen_url.clone(),
        instructor: details.instructor.clone(),
        nivel: details.nivel.clone(),
        estudiantes: details.estudiantes,
        categories: details.categories.clone(),
    }
}

fn to_page_resource(page: Page<Curso>) -> CursoPageResource {
    CursoPageResource {
        items: page.items.iter().map(to_resource).collect(),
        next_cursor: page.next_cursor,
    }
}

fn map_domain_error(error: CatalogDomainError) -> RestError {
    let status = match error {
        CatalogDomainError::InvalidCursoId
        | CatalogDomainError::InvalidNombre
        | CatalogDomainError::NegativeValue(_)
        | CatalogDomainError::InvalidPageLimit(_)
        | CatalogDomainError::InvalidCursor
        | CatalogDomainError::MissingSearchTerm(_) => StatusCode::BAD_REQUEST,
        CatalogDomainError::CursoAlreadyExists => StatusCode::CONFLICT,
        CatalogDomainError::CursoNotFound => StatusCode::NOT_FOUND,
        CatalogDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if let CatalogDomainError::InfrastructureError(detail) = &error {
        tracing::error!(%detail, "catalog request failed");
    }

    rest_error(status, error.to_string())
}
