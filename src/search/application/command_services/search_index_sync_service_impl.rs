use std::sync::Arc;

use async_trait::async_trait;

use crate::search::{
    domain::{
        model::entities::{
            course_change::CourseChange, course_document::CourseDocument,
            sync_outcome::SyncOutcome,
        },
        services::search_index_sync_service::SearchIndexSyncService,
    },
    infrastructure::index::repositories::search_index_repository::SearchIndexRepository,
};

pub struct SearchIndexSyncServiceImpl {
    index_repository: Arc<dyn SearchIndexRepository>,
}

impl SearchIndexSyncServiceImpl {
    pub fn new(index_repository: Arc<dyn SearchIndexRepository>) -> Self {
        Self { index_repository }
    }
}

#[async_trait]
impl SearchIndexSyncService for SearchIndexSyncServiceImpl {
    async fn handle_apply(&self, changes: Vec<CourseChange>) -> SyncOutcome {
        let mut outcome = SyncOutcome::default();

        for change in changes {
            let result = match &change {
                CourseChange::Upsert(document) => {
                    self.index_repository.upsert_document(document).await
                }
                CourseChange::Remove {
                    tenant_id,
                    curso_id,
                } => {
                    self.index_repository
                        .delete_document(&CourseDocument::document_id(tenant_id, curso_id))
                        .await
                }
                CourseChange::Unusable(reason) => {
                    tracing::warn!(%reason, "change record skipped");
                    outcome.skipped += 1;
                    continue;
                }
            };

            match result {
                Ok(()) => outcome.applied += 1,
                Err(error) => {
                    tracing::error!(%error, change = ?change, "change record failed");
                    outcome.failed += 1;
                }
            }
        }

        tracing::info!(
            applied = outcome.applied,
            skipped = outcome.skipped,
            failed = outcome.failed,
            "change batch applied"
        );

        outcome
    }
}
