use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogDomainError {
    #[error("curso_id must be 1-128 characters of letters, digits, '_', '.' or '-'")]
    InvalidCursoId,

    #[error("nombre is required")]
    InvalidNombre,

    #[error("{0} must not be negative")]
    NegativeValue(&'static str),

    #[error("invalid page limit: {0}")]
    InvalidPageLimit(String),

    #[error("invalid pagination cursor")]
    InvalidCursor,

    #[error("{0} is required")]
    MissingSearchTerm(&'static str),

    #[error("curso already exists")]
    CursoAlreadyExists,

    #[error("curso not found")]
    CursoNotFound,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
