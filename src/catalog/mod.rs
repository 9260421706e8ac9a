use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    catalog::{
        application::{
            command_services::curso_command_service_impl::CursoCommandServiceImpl,
            query_services::curso_query_service_impl::CursoQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_curso_repository_impl::SqlxCursoRepositoryImpl,
        interfaces::rest::controllers::curso_rest_controller::{CursoRestControllerState, router},
    },
    iam::interfaces::acl::token_gate_facade::TokenGateFacade,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_catalog_router(pool: PgPool, token_gate: Arc<dyn TokenGateFacade>) -> Router {
    let curso_repository = Arc::new(SqlxCursoRepositoryImpl::new(pool));

    router(CursoRestControllerState {
        command_service: Arc::new(CursoCommandServiceImpl::new(curso_repository.clone())),
        query_service: Arc::new(CursoQueryServiceImpl::new(curso_repository)),
        token_gate,
    })
}
