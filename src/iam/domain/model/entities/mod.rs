pub mod issued_access_token;
pub mod token_endorsement;
pub mod token_record;
pub mod user_account;
