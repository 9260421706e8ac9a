use async_trait::async_trait;

use crate::{
    iam::domain::model::value_objects::{tenant_id::TenantId, user_id::UserId},
    purchases::domain::model::{
        entities::compra::Compra, enums::purchases_domain_error::PurchasesDomainError,
    },
};

#[async_trait]
pub trait CompraRepository: Send + Sync {
    async fn insert(&self, compra: &Compra) -> Result<bool, PurchasesDomainError>;

    async fn list_page(
        &self,
        tenant_id: &TenantId,
        user_id: Option<&UserId>,
        after: Option<&str>,
        fetch: i64,
    ) -> Result<Vec<Compra>, PurchasesDomainError>;
}
