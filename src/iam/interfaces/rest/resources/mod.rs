pub mod login_request_resource;
pub mod login_response_resource;
pub mod register_user_request_resource;
pub mod token_validation_envelope_resource;
pub mod user_account_resource;
