use async_trait::async_trait;

use crate::iam::domain::model::{
    entities::user_account::UserAccount,
    enums::iam_domain_error::IamDomainError,
    value_objects::{tenant_id::TenantId, user_id::UserId},
};

#[async_trait]
pub trait UserAccountRepository: Send + Sync {
    async fn find(
        &self,
        tenant_id: &TenantId,
        user_id: &UserId,
    ) -> Result<Option<UserAccount>, IamDomainError>;

    async fn insert(&self, account: &UserAccount) -> Result<bool, IamDomainError>;
}
