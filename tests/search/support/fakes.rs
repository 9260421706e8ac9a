use std::collections::HashMap;

use async_trait::async_trait;
use cursos_api::iam::{
    domain::model::{
        enums::auth_error::AuthError, value_objects::resolved_identity::ResolvedIdentity,
    },
    interfaces::acl::token_gate_facade::TokenGateFacade,
};

pub struct FakeTokenGate {
    identities: HashMap<String, ResolvedIdentity>,
}

impl FakeTokenGate {
    pub fn with_tokens(tokens: Vec<(&str, ResolvedIdentity)>) -> Self {
        Self {
            identities: tokens
                .into_iter()
                .map(|(token, identity)| (token.to_string(), identity))
                .collect(),
        }
    }
}

#[async_trait]
impl TokenGateFacade for FakeTokenGate {
    async fn authenticate(
        &self,
        raw_credential: Option<&str>,
    ) -> Result<ResolvedIdentity, AuthError> {
        let token = raw_credential
            .map(|raw| raw.trim().trim_start_matches("Bearer ").trim())
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingCredential)?;
        self.identities
            .get(token)
            .cloned()
            .ok_or(AuthError::NotFound)
    }
}
