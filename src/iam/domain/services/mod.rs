pub mod credential_hasher;
pub mod user_account_command_service;
pub mod user_account_query_service;
