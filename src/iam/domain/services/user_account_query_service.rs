use async_trait::async_trait;

use crate::iam::domain::model::{
    entities::user_account::UserAccount, enums::iam_domain_error::IamDomainError,
    value_objects::resolved_identity::ResolvedIdentity,
};

#[async_trait]
pub trait UserAccountQueryService: Send + Sync {
    async fn handle_get_current(
        &self,
        identity: &ResolvedIdentity,
    ) -> Result<UserAccount, IamDomainError>;
}
