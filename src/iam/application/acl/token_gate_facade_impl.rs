use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{
    iam::{
        domain::model::{
            enums::auth_error::AuthError,
            value_objects::{
                bearer_credential::BearerCredential, resolved_identity::ResolvedIdentity,
            },
        },
        interfaces::acl::{
            token_authority::{TokenAuthority, TokenLookup},
            token_gate_facade::TokenGateFacade,
        },
    },
    shared::domain::services::clock::Clock,
};

pub struct TokenGateFacadeImpl {
    authority: Arc<dyn TokenAuthority>,
    clock: Arc<dyn Clock>,
    lookup_timeout: Duration,
}

impl TokenGateFacadeImpl {
    pub fn new(
        authority: Arc<dyn TokenAuthority>,
        clock: Arc<dyn Clock>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            authority,
            clock,
            lookup_timeout,
        }
    }

    async fn resolve(&self, credential: &BearerCredential) -> Result<ResolvedIdentity, AuthError> {
        let lookup = tokio::time::timeout(self.lookup_timeout, self.authority.lookup(credential))
            .await
            .map_err(|_| {
                AuthError::UpstreamUnavailable(format!(
                    "token lookup timed out after {} ms",
                    self.lookup_timeout.as_millis()
                ))
            })??;

        // Read once so every comparison below sees the same instant.
        let now = self.clock.now();

        match lookup {
            TokenLookup::Absent => Err(AuthError::NotFound),
            TokenLookup::Record(record) => record.validate_at(now),
            TokenLookup::Endorsed(endorsement) => endorsement.validate_at(now),
        }
    }
}

#[async_trait]
impl TokenGateFacade for TokenGateFacadeImpl {
    async fn authenticate(
        &self,
        raw_credential: Option<&str>,
    ) -> Result<ResolvedIdentity, AuthError> {
        let credential = match BearerCredential::parse(raw_credential) {
            Ok(credential) => credential,
            Err(error) => {
                tracing::debug!(reason = error.kind(), detail = %error, "credential rejected before lookup");
                return Err(error);
            }
        };

        let result = self.resolve(&credential).await;

        match &result {
            Ok(identity) => tracing::debug!(
                token = %credential.fingerprint(),
                tenant_id = %identity.tenant_id(),
                "token accepted"
            ),
            Err(error @ AuthError::UpstreamUnavailable(_)) => tracing::error!(
                token = %credential.fingerprint(),
                reason = error.kind(),
                detail = %error,
                "token could not be checked"
            ),
            Err(error) => tracing::warn!(
                token = %credential.fingerprint(),
                reason = error.kind(),
                detail = %error,
                "token rejected"
            ),
        }

        result
    }
}
