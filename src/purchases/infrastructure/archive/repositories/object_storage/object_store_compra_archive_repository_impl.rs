use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use object_store::{ObjectStore, PutPayload, path::Path};

use crate::purchases::{
    domain::model::{
        entities::compra_snapshot::CompraSnapshot,
        enums::purchases_domain_error::PurchasesDomainError,
    },
    infrastructure::archive::repositories::compra_archive_repository::CompraArchiveRepository,
};

pub struct ObjectStoreCompraArchiveRepositoryImpl {
    store: Arc<dyn ObjectStore>,
}

impl ObjectStoreCompraArchiveRepositoryImpl {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CompraArchiveRepository for ObjectStoreCompraArchiveRepositoryImpl {
    async fn put_snapshot(
        &self,
        day: NaiveDate,
        snapshot: &CompraSnapshot,
    ) -> Result<String, PurchasesDomainError> {
        // Each segment is encoded on its own, so a '/' inside an id cannot add a level.
        let path = Path::from_iter(snapshot.archive_segments(day));
        let body = serde_json::to_vec(snapshot)
            .map_err(|e| PurchasesDomainError::InfrastructureError(e.to_string()))?;

        self.store
            .put(&path, PutPayload::from(body))
            .await
            .map_err(|e| PurchasesDomainError::InfrastructureError(e.to_string()))?;

        Ok(path.to_string())
    }
}
