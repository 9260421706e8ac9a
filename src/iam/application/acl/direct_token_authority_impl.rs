use std::sync::Arc;

use async_trait::async_trait;

use crate::iam::{
    domain::model::{
        enums::auth_error::AuthError, value_objects::bearer_credential::BearerCredential,
    },
    infrastructure::persistence::repositories::token_record_repository::TokenRecordRepository,
    interfaces::acl::token_authority::{TokenAuthority, TokenLookup},
};

pub struct DirectTokenAuthorityImpl {
    repository: Arc<dyn TokenRecordRepository>,
}

impl DirectTokenAuthorityImpl {
    pub fn new(repository: Arc<dyn TokenRecordRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TokenAuthority for DirectTokenAuthorityImpl {
    async fn lookup(&self, credential: &BearerCredential) -> Result<TokenLookup, AuthError> {
        self.repository
            .find_by_token(credential.value())
            .await
            .map(|found| found.map_or(TokenLookup::Absent, TokenLookup::Record))
            .map_err(AuthError::UpstreamUnavailable)
    }
}
