use async_trait::async_trait;

use crate::iam::domain::model::entities::token_record::TokenRecord;

#[async_trait]
pub trait TokenRecordRepository: Send + Sync {
    async fn find_by_token(&self, token: &str) -> Result<Option<TokenRecord>, String>;

    async fn save(&self, record: &TokenRecord) -> Result<(), String>;
}
