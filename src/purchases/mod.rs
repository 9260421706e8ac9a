use std::sync::Arc;

use axum::Router;
use object_store::{ObjectStore, aws::AmazonS3Builder, local::LocalFileSystem};
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    iam::interfaces::acl::token_gate_facade::TokenGateFacade,
    purchases::{
        application::{
            command_services::{
                compra_archive_service_impl::CompraArchiveServiceImpl,
                compra_command_service_impl::CompraCommandServiceImpl,
            },
            query_services::compra_query_service_impl::CompraQueryServiceImpl,
        },
        domain::services::compra_archive_service::CompraArchiveService,
        infrastructure::{
            archive::repositories::object_storage::object_store_compra_archive_repository_impl::ObjectStoreCompraArchiveRepositoryImpl,
            persistence::repositories::postgres::sqlx_compra_repository_impl::SqlxCompraRepositoryImpl,
        },
        interfaces::rest::controllers::compra_rest_controller::{
            CompraRestControllerState, router,
        },
    },
    shared::domain::services::clock::SystemClock,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_purchases_router(pool: PgPool, token_gate: Arc<dyn TokenGateFacade>) -> Router {
    let compra_repository = Arc::new(SqlxCompraRepositoryImpl::new(pool));

    router(CompraRestControllerState {
        command_service: Arc::new(CompraCommandServiceImpl::new(
            compra_repository.clone(),
            Arc::new(SystemClock),
        )),
        query_service: Arc::new(CompraQueryServiceImpl::new(compra_repository)),
        token_gate,
    })
}

fn build_archive_store(config: &AppConfig) -> Result<Arc<dyn ObjectStore>, String> {
    if let Some(bucket) = &config.archive_bucket {
        let store = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| e.to_string())?;
        return Ok(Arc::new(store));
    }

    if let Some(dir) = &config.archive_dir {
        std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
        let store = LocalFileSystem::new_with_prefix(dir).map_err(|e| e.to_string())?;
        return Ok(Arc::new(store));
    }

    Err("ARCHIVE_BUCKET or ARCHIVE_DIR is required to archive compras".to_string())
}

pub fn build_compra_archive_service(
    config: &AppConfig,
) -> Result<Arc<dyn CompraArchiveService>, String> {
    Ok(Arc::new(CompraArchiveServiceImpl::new(
        Arc::new(ObjectStoreCompraArchiveRepositoryImpl::new(build_archive_store(config)?)),
        Arc::new(SystemClock),
    )))
}
