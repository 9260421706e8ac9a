use async_trait::async_trait;

use crate::{
    purchases::domain::model::{
        entities::compra::Compra, enums::purchases_domain_error::PurchasesDomainError,
        queries::list_compras_query::ListComprasQuery,
    },
    shared::domain::model::value_objects::page::Page,
};

#[async_trait]
pub trait CompraQueryService: Send + Sync {
    async fn handle_list(
        &self,
        query: ListComprasQuery,
    ) -> Result<Page<Compra>, PurchasesDomainError>;
}
