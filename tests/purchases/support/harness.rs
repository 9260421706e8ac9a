use std::sync::Arc;

use chrono::{DateTime, Utc};
use cursos_api::{
    iam::interfaces::acl::token_gate_facade::TokenGateFacade,
    purchases::{
        application::{
            command_services::{
                compra_archive_service_impl::CompraArchiveServiceImpl,
                compra_command_service_impl::CompraCommandServiceImpl,
            },
            query_services::compra_query_service_impl::CompraQueryServiceImpl,
        },
        domain::model::entities::compra::Compra,
        infrastructure::archive::repositories::{
            compra_archive_repository::CompraArchiveRepository,
            object_storage::object_store_compra_archive_repository_impl::ObjectStoreCompraArchiveRepositoryImpl,
        },
        interfaces::rest::controllers::compra_rest_controller::{
            CompraRestControllerState, router,
        },
    },
};
use object_store::ObjectStore;

use super::fakes::{FakeCompraRepository, FixedClock};

pub struct PurchasesHarness {
    pub repository: Arc<FakeCompraRepository>,
    pub command_service: CompraCommandServiceImpl,
    pub query_service: CompraQueryServiceImpl,
}

pub fn create_purchases_harness(seed: Vec<Compra>, now: DateTime<Utc>) -> PurchasesHarness {
    let repository = Arc::new(FakeCompraRepository::seeded(seed));

    PurchasesHarness {
        command_service: CompraCommandServiceImpl::new(
            repository.clone(),
            Arc::new(FixedClock(now)),
        ),
        query_service: CompraQueryServiceImpl::new(repository.clone()),
        repository,
    }
}

pub async fn spawn_purchases_api(
    repository: Arc<FakeCompraRepository>,
    token_gate: Arc<dyn TokenGateFacade>,
    now: DateTime<Utc>,
) -> String {
    let app = router(CompraRestControllerState {
        command_service: Arc::new(CompraCommandServiceImpl::new(
            repository.clone(),
            Arc::new(FixedClock(now)),
        )),
        query_service: Arc::new(CompraQueryServiceImpl::new(repository)),
        token_gate,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let address = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server runs");
    });

    format!("http://{address}")
}

pub fn create_archive_service(
    store: Arc<dyn ObjectStore>,
    now: DateTime<Utc>,
) -> CompraArchiveServiceImpl {
    create_archive_service_over(
        Arc::new(ObjectStoreCompraArchiveRepositoryImpl::new(store)),
        now,
    )
}

pub fn create_archive_service_over(
    repository: Arc<dyn CompraArchiveRepository>,
    now: DateTime<Utc>,
) -> CompraArchiveServiceImpl {
    CompraArchiveServiceImpl::new(repository, Arc::new(FixedClock(now)))
}
