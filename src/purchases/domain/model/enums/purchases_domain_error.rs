use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PurchasesDomainError {
    #[error("order_id must be 1-128 characters of letters, digits, '_', '.' or '-'")]
    InvalidOrderId,

    #[error("curso_id is invalid")]
    InvalidCursoId,

    #[error("user_id is invalid")]
    InvalidUserId,

    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    #[error("price must not be negative")]
    InvalidPrice,

    #[error("invalid page limit: {0}")]
    InvalidPageLimit(String),

    #[error("invalid pagination cursor")]
    InvalidCursor,

    #[error("order already exists")]
    CompraAlreadyExists,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
