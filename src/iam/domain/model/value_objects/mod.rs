pub mod access_token;
pub mod bearer_credential;
pub mod password;
pub mod resolved_identity;
pub mod tenant_id;
pub mod token_expiry;
pub mod user_id;
