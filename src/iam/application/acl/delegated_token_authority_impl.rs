use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::iam::{
    domain::model::{
        entities::token_endorsement::TokenEndorsement, enums::auth_error::AuthError,
        value_objects::bearer_credential::BearerCredential,
    },
    interfaces::{
        acl::token_authority::{TokenAuthority, TokenLookup},
        rest::resources::token_validation_envelope_resource::{
            TokenValidationEnvelopeResource, TokenValidationHeadersResource,
            TokenValidationIdentityResource, TokenValidationRequestResource,
        },
    },
};

pub struct DelegatedTokenAuthorityImpl {
    client: reqwest::Client,
    endpoint: String,
}

impl DelegatedTokenAuthorityImpl {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self { client, endpoint })
    }

    fn interpret(envelope: TokenValidationEnvelopeResource) -> Result<TokenLookup, AuthError> {
        match envelope.status_code {
            200 => {
                let identity = Self::parse_identity(envelope.body)?;
                Ok(TokenLookup::Endorsed(TokenEndorsement::new(
                    identity.tenant_id,
                    identity.user_id,
                    identity.expires,
                )))
            }
            code if code >= 500 => Err(AuthError::UpstreamUnavailable(format!(
                "authority reported status {code}"
            ))),
            _ => Ok(TokenLookup::Absent),
        }
    }

    fn parse_identity(body: Option<Value>) -> Result<TokenValidationIdentityResource, AuthError> {
        let parsed = match body {
            Some(Value::String(raw)) => serde_json::from_str(&raw),
            Some(value @ Value::Object(_)) => serde_json::from_value(value),
            _ => {
                return Err(AuthError::Malformed(
                    "authority endorsement has no body".to_string(),
                ));
            }
        };

        parsed.map_err(|_| {
            AuthError::Malformed("authority endorsement body is not an identity".to_string())
        })
    }
}

#[async_trait]
impl TokenAuthority for DelegatedTokenAuthorityImpl {
    async fn lookup(&self, credential: &BearerCredential) -> Result<TokenLookup, AuthError> {
        let request = TokenValidationRequestResource {
            headers: TokenValidationHeadersResource {
                authorization: Some(format!("Bearer {}", credential.value())),
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::UpstreamUnavailable(format!(
                "authority answered HTTP {status}"
            )));
        }

        let envelope = response
            .json::<TokenValidationEnvelopeResource>()
            .await
            .map_err(|e| {
                AuthError::UpstreamUnavailable(format!("authority answer is not an envelope: {e}"))
            })?;

        Self::interpret(envelope)
    }
}
