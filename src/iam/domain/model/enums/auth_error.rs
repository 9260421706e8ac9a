use thiserror::Error;

/// Why a credential could not be turned into an identity.
///
/// The variants are kept apart for diagnostics; callers must collapse
/// `NotFound`, `Expired` and `Malformed` into one external answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("credential is missing")]
    MissingCredential,

    #[error("credential is malformed: {0}")]
    Malformed(String),

    #[error("token not found")]
    NotFound,

    #[error("token expired")]
    Expired,

    #[error("token authority unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl AuthError {
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "missing_credential",
            AuthError::Malformed(_) => "malformed",
            AuthError::NotFound => "not_found",
            AuthError::Expired => "expired",
            AuthError::UpstreamUnavailable(_) => "upstream_unavailable",
        }
    }
}
