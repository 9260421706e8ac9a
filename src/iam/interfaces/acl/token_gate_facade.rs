use async_trait::async_trait;

use crate::iam::domain::model::{
    enums::auth_error::AuthError, value_objects::resolved_identity::ResolvedIdentity,
};

#[async_trait]
pub trait TokenGateFacade: Send + Sync {
    async fn authenticate(
        &self,
        raw_credential: Option<&str>,
    ) -> Result<ResolvedIdentity, AuthError>;
}
