use crate::iam::domain::model::{
    enums::auth_error::AuthError,
    value_objects::{tenant_id::TenantId, user_id::UserId},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedIdentity {
    tenant_id: TenantId,
    user_id: UserId,
}

impl ResolvedIdentity {
    pub fn new(tenant_id: TenantId, user_id: UserId) -> Self {
        Self { tenant_id, user_id }
    }

    pub fn from_parts(tenant_id: Option<&str>, user_id: Option<&str>) -> Result<Self, AuthError> {
        let tenant_id = TenantId::new(tenant_id.unwrap_or_default().to_string())
            .map_err(|_| AuthError::Malformed("token carries no tenant_id".to_string()))?;
        let user_id = UserId::new(user_id.unwrap_or_default().to_string())
            .map_err(|_| AuthError::Malformed("token carries no user_id".to_string()))?;

        Ok(Self { tenant_id, user_id })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}
