use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    purchases::{
        domain::{
            model::entities::{archive_outcome::ArchiveOutcome, compra_change::CompraChange},
            services::compra_archive_service::CompraArchiveService,
        },
        infrastructure::archive::repositories::compra_archive_repository::CompraArchiveRepository,
    },
    shared::domain::services::clock::Clock,
};

pub struct CompraArchiveServiceImpl {
    archive_repository: Arc<dyn CompraArchiveRepository>,
    clock: Arc<dyn Clock>,
}

impl CompraArchiveServiceImpl {
    pub fn new(archive_repository: Arc<dyn CompraArchiveRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            archive_repository,
            clock,
        }
    }
}

#[async_trait]
impl CompraArchiveService for CompraArchiveServiceImpl {
    async fn handle_archive(&self, changes: Vec<CompraChange>) -> ArchiveOutcome {
        let day = self.clock.now().date_naive();
        let mut outcome = ArchiveOutcome::default();

        for change in changes {
            let snapshot = match change {
                CompraChange::Archive(snapshot) => snapshot,
                CompraChange::Ignored(event) => {
                    tracing::debug!(%event, "change record ignored");
                    outcome.skipped += 1;
                    continue;
                }
                CompraChange::Unusable(reason) => {
                    tracing::warn!(%reason, "change record skipped");
                    outcome.skipped += 1;
                    continue;
                }
            };

            match self.archive_repository.put_snapshot(day, &snapshot).await {
                Ok(key) => {
                    tracing::info!(%key, tenant_id = %snapshot.tenant_id, "compra archived");
                    outcome.archived += 1;
                }
                Err(error) => {
                    tracing::error!(
                        %error,
                        tenant_id = %snapshot.tenant_id,
                        order_id = %snapshot.order_id,
                        "compra archive failed"
                    );
                    outcome.failed += 1;
                }
            }
        }

        tracing::info!(
            archived = outcome.archived,
            skipped = outcome.skipped,
            failed = outcome.failed,
            "compra batch archived"
        );

        outcome
    }
}
