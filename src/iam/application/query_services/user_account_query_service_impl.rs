use std::sync::Arc;

use async_trait::async_trait;

use crate::iam::{
    domain::{
        model::{
            entities::user_account::UserAccount, enums::iam_domain_error::IamDomainError,
            value_objects::resolved_identity::ResolvedIdentity,
        },
        services::user_account_query_service::UserAccountQueryService,
    },
    infrastructure::persistence::repositories::user_account_repository::UserAccountRepository,
};

pub struct UserAccountQueryServiceImpl {
    user_repository: Arc<dyn UserAccountRepository>,
}

impl UserAccountQueryServiceImpl {
    pub fn new(user_repository: Arc<dyn UserAccountRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserAccountQueryService for UserAccountQueryServiceImpl {
    async fn handle_get_current(
        &self,
        identity: &ResolvedIdentity,
    ) -> Result<UserAccount, IamDomainError> {
        self.user_repository
            .find(identity.tenant_id(), identity.user_id())
            .await?
            .ok_or(IamDomainError::UserNotFound)
    }
}
