use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    purchases::{
        domain::{
            model::{
                entities::compra::Compra, enums::purchases_domain_error::PurchasesDomainError,
                queries::list_compras_query::ListComprasQuery,
            },
            services::compra_query_service::CompraQueryService,
        },
        infrastructure::persistence::repositories::compra_repository::CompraRepository,
    },
    shared::domain::model::value_objects::page::Page,
};

pub struct CompraQueryServiceImpl {
    compra_repository: Arc<dyn CompraRepository>,
}

impl CompraQueryServiceImpl {
    pub fn new(compra_repository: Arc<dyn CompraRepository>) -> Self {
        Self { compra_repository }
    }
}

#[async_trait]
impl CompraQueryService for CompraQueryServiceImpl {
    async fn handle_list(
        &self,
        query: ListComprasQuery,
    ) -> Result<Page<Compra>, PurchasesDomainError> {
        let rows = self
            .compra_repository
            .list_page(
                query.tenant_id(),
                query.user_id(),
                query.after().map(|cursor| cursor.key()),
                query.limit().fetch_size(),
            )
            .await?;

        Ok(Page::from_overfetch(
            rows,
            query.limit(),
            query.tenant_id().as_str(),
            |compra| compra.order_id().value(),
        ))
    }
}
