use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    purchases::{
        domain::{
            model::{
                commands::create_compra_command::CreateCompraCommand,
                entities::compra::{Compra, CompraParts},
                enums::purchases_domain_error::PurchasesDomainError,
            },
            services::compra_command_service::CompraCommandService,
        },
        infrastructure::persistence::repositories::compra_repository::CompraRepository,
    },
    shared::domain::services::clock::Clock,
};

pub struct CompraCommandServiceImpl {
    compra_repository: Arc<dyn CompraRepository>,
    clock: Arc<dyn Clock>,
}

impl CompraCommandServiceImpl {
    pub fn new(compra_repository: Arc<dyn CompraRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            compra_repository,
            clock,
        }
    }
}

#[async_trait]
impl CompraCommandService for CompraCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateCompraCommand,
    ) -> Result<Compra, PurchasesDomainError> {
        let compra = Compra::new(CompraParts {
            tenant_id: command.tenant_id().clone(),
            order_id: command.order_id().clone(),
            user_id: command.user_id().clone(),
            curso_id: command.curso_id().clone(),
            quantity: command.quantity(),
            price: command.price(),
            created_at: self.clock.now(),
        });

        if !self.compra_repository.insert(&compra).await? {
            return Err(PurchasesDomainError::CompraAlreadyExists);
        }

        tracing::info!(
            tenant_id = %compra.tenant_id(),
            order_id = %compra.order_id(),
            curso_id = %compra.curso_id(),
            "compra recorded"
        );

        Ok(compra)
    }
}
