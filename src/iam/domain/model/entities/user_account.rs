use chrono::{DateTime, Utc};

use crate::iam::domain::model::value_objects::{tenant_id::TenantId, user_id::UserId};

#[derive(Clone, Debug)]
pub struct UserAccount {
    tenant_id: TenantId,
    user_id: UserId,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn new(
        tenant_id: TenantId,
        user_id: UserId,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            tenant_id,
            user_id,
            password_hash,
            created_at,
        }
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
