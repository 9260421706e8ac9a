pub mod postgres;
pub mod token_record_repository;
pub mod user_account_repository;
