use thiserror::Error;

#[derive(Debug, Error)]
pub enum IamDomainError {
    #[error("tenant_id is required")]
    InvalidTenantId,

    #[error("user_id is required")]
    InvalidUserId,

    #[error("password is invalid; minimum length is 8")]
    InvalidPassword,

    #[error("user already registered")]
    UserAlreadyExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user not found")]
    UserNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
