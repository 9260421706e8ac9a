pub mod auth_error;
pub mod iam_domain_error;
pub mod token_validation_strategy;
