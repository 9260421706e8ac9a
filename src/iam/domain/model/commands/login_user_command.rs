use crate::iam::domain::model::{
    enums::iam_domain_error::IamDomainError,
    value_objects::{tenant_id::TenantId, user_id::UserId},
};

#[derive(Clone)]
pub struct LoginUserCommand {
    tenant_id: TenantId,
    user_id: UserId,
    password: String,
}

impl LoginUserCommand {
    pub fn new(tenant_id: String, user_id: String, password: String) -> Result<Self, IamDomainError> {
        if password.is_empty() {
            return Err(IamDomainError::InvalidCredentials);
        }

        Ok(Self {
            tenant_id: TenantId::new(tenant_id).map_err(|_| IamDomainError::InvalidTenantId)?,
            user_id: UserId::new(user_id).map_err(|_| IamDomainError::InvalidUserId)?,
            password,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
