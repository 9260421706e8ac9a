use async_trait::async_trait;

use crate::purchases::domain::model::{
    commands::create_compra_command::CreateCompraCommand, entities::compra::Compra,
    enums::purchases_domain_error::PurchasesDomainError,
};

#[async_trait]
pub trait CompraCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateCompraCommand,
    ) -> Result<Compra, PurchasesDomainError>;
}
