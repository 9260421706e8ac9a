use async_trait::async_trait;

use crate::purchases::domain::model::entities::{
    archive_outcome::ArchiveOutcome, compra_change::CompraChange,
};

#[async_trait]
pub trait CompraArchiveService: Send + Sync {
    async fn handle_archive(&self, changes: Vec<CompraChange>) -> ArchiveOutcome;
}
