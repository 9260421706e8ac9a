use crate::iam::domain::model::{
    enums::iam_domain_error::IamDomainError,
    value_objects::{password::Password, tenant_id::TenantId, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct RegisterUserCommand {
    tenant_id: TenantId,
    user_id: UserId,
    password: Password,
}

impl RegisterUserCommand {
    pub fn new(tenant_id: String, user_id: String, password: String) -> Result<Self, IamDomainError> {
        Ok(Self {
            tenant_id: TenantId::new(tenant_id).map_err(|_| IamDomainError::InvalidTenantId)?,
            user_id: UserId::new(user_id).map_err(|_| IamDomainError::InvalidUserId)?,
            password: Password::new(password)?,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}
