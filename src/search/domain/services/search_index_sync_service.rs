use async_trait::async_trait;

use crate::search::domain::model::entities::{
    course_change::CourseChange, sync_outcome::SyncOutcome,
};

#[async_trait]
pub trait SearchIndexSyncService: Send + Sync {
    async fn handle_apply(&self, changes: Vec<CourseChange>) -> SyncOutcome;
}
