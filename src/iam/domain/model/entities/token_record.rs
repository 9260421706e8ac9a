use chrono::{DateTime, Utc};

use crate::iam::domain::model::{
    enums::auth_error::AuthError,
    value_objects::{
        resolved_identity::ResolvedIdentity, tenant_id::TenantId, token_expiry::TokenExpiry,
        user_id::UserId,
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRecord {
    token: String,
    tenant_id: Option<String>,
    user_id: Option<String>,
    expires: Option<String>,
}

impl TokenRecord {
    pub fn issue(token: String, tenant_id: &TenantId, user_id: &UserId, expires: TokenExpiry) -> Self {
        Self {
            token,
            tenant_id: Some(tenant_id.as_str().to_string()),
            user_id: Some(user_id.as_str().to_string()),
            expires: Some(expires.to_iso8601()),
        }
    }

    pub fn restore(
        token: String,
        tenant_id: Option<String>,
        user_id: Option<String>,
        expires: Option<String>,
    ) -> Self {
        Self {
            token,
            tenant_id,
            user_id,
            expires,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn expires(&self) -> Option<&str> {
        self.expires.as_deref()
    }

    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<ResolvedIdentity, AuthError> {
        let raw_expiry = self
            .expires
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AuthError::Malformed("token record has no expiry".to_string()))?;

        let expiry = TokenExpiry::parse(raw_expiry).ok_or_else(|| {
            AuthError::Malformed("token expiry is not a valid timestamp".to_string())
        })?;

        if expiry.has_passed(now) {
            return Err(AuthError::Expired);
        }

        ResolvedIdentity::from_parts(self.tenant_id.as_deref(), self.user_id.as_deref())
    }
}
