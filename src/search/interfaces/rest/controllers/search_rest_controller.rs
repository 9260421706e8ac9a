use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};

use crate::{
    iam::interfaces::{
        acl::token_gate_facade::TokenGateFacade,
        rest::guards::token_gate_guard::authenticate_request,
    },
    search::{
        domain::{
            model::{
                enums::search_domain_error::SearchDomainError,
                queries::{
                    autocomplete_cursos_query::AutocompleteCursosQuery,
                    search_cursos_query::SearchCursosQuery,
                },
                value_objects::search_term::MIN_PREFIX_CHARS,
            },
            services::search_query_service::SearchQueryService,
        },
        interfaces::rest::resources::{
            autocomplete_response_resource::{AutocompleteResponseResource, SuggestionResource},
            search_query_resource::{AutocompleteQueryResource, SearchQueryResource},
            search_response_resource::{SearchHitResource, SearchResponseResource},
        },
    },
    shared::interfaces::rest::resources::error_response_resource::{
        ErrorResponseResource, RestError, rest_error,
    },
};

#[derive(Clone)]
pub struct SearchRestControllerState {
    pub query_service: Arc<dyn SearchQueryService>,
    pub token_gate: Arc<dyn TokenGateFacade>,
}

pub fn router(state: SearchRestControllerState) -> Router {
    Router::new()
        .route("/cursos/search", get(search_cursos))
        .route("/cursos/autocomplete", get(autocomplete_cursos))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/cursos/search",
    tag = "search",
    security(("bearerAuth" = [])),
    params(("q" = String, Query, description = "Text matched against the course name")),
    responses(
        (status = 200, description = "Matching cursos of the caller's tenant", body = SearchResponseResource),
        (status = 400, description = "Missing q", body = ErrorResponseResource),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource),
        (status = 502, description = "Search index failure", body = ErrorResponseResource)
    )
)]
pub async fn search_cursos(
    State(state): State<SearchRestControllerState>,
    headers: HeaderMap,
    Query(params): Query<SearchQueryResource>,
) -> Result<Json<SearchResponseResource>, RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;

    let query = SearchCursosQuery::new(&identity, params.q).map_err(map_domain_error)?;
    let search_term = query.term().value().to_string();
    let results = state
        .query_service
        .handle_search(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SearchResponseResource {
        message: "search completed".to_string(),
        search_term,
        tenant_id: identity.tenant_id().to_string(),
        total: results.total,
        results: results
            .hits
            .into_iter()
            .map(|hit| SearchHitResource {
                id: hit.document_id,
                score: hit.score,
                curso: hit.source,
            })
            .collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/cursos/autocomplete",
    tag = "search",
    security(("bearerAuth" = [])),
    params(
        ("q" = String, Query, description = "Name prefix, at least 2 characters to get suggestions"),
        ("size" = Option<u32>, Query, description = "Suggestions to return, 1-20, default 5")
    ),
    responses(
        (status = 200, description = "Suggestions from the caller's tenant", body = AutocompleteResponseResource),
        (status = 400, description = "Missing q or invalid size", body = ErrorResponseResource),
        (status = 401, description = "Missing token", body = ErrorResponseResource),
        (status = 403, description = "Invalid or expired token", body = ErrorResponseResource),
        (status = 502, description = "Search index failure", body = ErrorResponseResource)
    )
)]
pub async fn autocomplete_cursos(
    State(state): State<SearchRestControllerState>,
    headers: HeaderMap,
    Query(params): Query<AutocompleteQueryResource>,
) -> Result<Json<AutocompleteResponseResource>, RestError> {
    let identity = authenticate_request(state.token_gate.as_ref(), &headers).await?;

    let query = AutocompleteCursosQuery::new(&identity, params.q, params.size)
        .map_err(map_domain_error)?;
    let prefix = query.prefix().value().to_string();
    let too_short = query.prefix().is_too_short_for_prefix();

    let suggestions = state
        .query_service
        .handle_autocomplete(query)
        .await
        .map_err(map_domain_error)?;

    let message = if too_short {
        format!("at least {MIN_PREFIX_CHARS} characters required")
    } else {
        format!("suggestions for \"{prefix}\"")
    };

    Ok(Json(AutocompleteResponseResource {
        message,
        prefix,
        suggestions_count: suggestions.len(),
        suggestions: suggestions
            .into_iter()
            .map(|suggestion| SuggestionResource {
                text: suggestion.text,
                score: suggestion.score,
                curso: suggestion.source,
            })
            .collect(),
    }))
}

fn map_domain_error(error: SearchDomainError) -> RestError {
    let status = match error {
        SearchDomainError::MissingSearchTerm | SearchDomainError::InvalidSuggestionSize => {
            StatusCode::BAD_REQUEST
        }
        SearchDomainError::IndexUnavailable(_) | SearchDomainError::UnexpectedIndexResponse(_) => {
            tracing::error!(%error, "search index call failed");
            StatusCode::BAD_GATEWAY
        }
    };

    let message = match status {
        StatusCode::BAD_GATEWAY => "search is temporarily unavailable".to_string(),
        _ => error.to_string(),
    };

    rest_error(status, message)
}
