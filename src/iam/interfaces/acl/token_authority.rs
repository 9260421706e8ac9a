use async_trait::async_trait;

use crate::iam::domain::model::{
    entities::{token_endorsement::TokenEndorsement, token_record::TokenRecord},
    enums::auth_error::AuthError,
    value_objects::bearer_credential::BearerCredential,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenLookup {
    Record(TokenRecord),
    Endorsed(TokenEndorsement),
    Absent,
}

/// Lookup strategy behind the token gate. Implementations only read; an
/// `Err` from `lookup` is reserved for "could not check", never "invalid".
#[async_trait]
pub trait TokenAuthority: Send + Sync {
    async fn lookup(&self, credential: &BearerCredential) -> Result<TokenLookup, AuthError>;
}
