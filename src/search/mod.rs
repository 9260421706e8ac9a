use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    iam::interfaces::acl::token_gate_facade::TokenGateFacade,
    search::{
        application::{
            command_services::search_index_sync_service_impl::SearchIndexSyncServiceImpl,
            query_services::search_query_service_impl::SearchQueryServiceImpl,
        },
        domain::services::search_index_sync_service::SearchIndexSyncService,
        infrastructure::index::repositories::elasticsearch::http_search_index_repository_impl::HttpSearchIndexRepositoryImpl,
        interfaces::rest::controllers::search_rest_controller::{
            SearchRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

fn build_index_repository(config: &AppConfig) -> Result<Arc<HttpSearchIndexRepositoryImpl>, String> {
    Ok(Arc::new(HttpSearchIndexRepositoryImpl::new(
        &config.search_url,
        config.search_index.clone(),
        config.search_timeout(),
    )?))
}

pub fn build_search_router(
    config: &AppConfig,
    token_gate: Arc<dyn TokenGateFacade>,
) -> Result<Router, String> {
    let index_repository = build_index_repository(config)?;

    Ok(router(SearchRestControllerState {
        query_service: Arc::new(SearchQueryServiceImpl::new(index_repository)),
        token_gate,
    }))
}

pub fn build_search_index_sync_service(
    config: &AppConfig,
) -> Result<Arc<dyn SearchIndexSyncService>, String> {
    let index_repository = build_index_repository(config)?;
    Ok(Arc::new(SearchIndexSyncServiceImpl::new(index_repository)))
}
