use chrono::{DateTime, Utc};

use crate::iam::domain::model::{
    enums::auth_error::AuthError,
    value_objects::{resolved_identity::ResolvedIdentity, token_expiry::TokenExpiry},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenEndorsement {
    tenant_id: Option<String>,
    user_id: Option<String>,
    expires: Option<String>,
}

impl TokenEndorsement {
    pub fn new(tenant_id: Option<String>, user_id: Option<String>, expires: Option<String>) -> Self {
        Self {
            tenant_id,
            user_id,
            expires,
        }
    }

    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<ResolvedIdentity, AuthError> {
        if let Some(raw_expiry) = self
            .expires
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            let expiry = TokenExpiry::parse(raw_expiry).ok_or_else(|| {
                AuthError::Malformed("endorsed expiry is not a valid timestamp".to_string())
            })?;
            if expiry.has_passed(now) {
                return Err(AuthError::Expired);
            }
        }

        ResolvedIdentity::from_parts(self.tenant_id.as_deref(), self.user_id.as_deref())
    }
}
