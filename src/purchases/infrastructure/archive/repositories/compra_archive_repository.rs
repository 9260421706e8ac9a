use async_trait::async_trait;
use chrono::NaiveDate;

use crate::purchases::domain::model::{
    entities::compra_snapshot::CompraSnapshot, enums::purchases_domain_error::PurchasesDomainError,
};

#[async_trait]
pub trait CompraArchiveRepository: Send + Sync {
    async fn put_snapshot(
        &self,
        day: NaiveDate,
        snapshot: &CompraSnapshot,
    ) -> Result<String, PurchasesDomainError>;
}
