pub mod sqlx_token_record_repository_impl;
pub mod sqlx_user_account_repository_impl;
