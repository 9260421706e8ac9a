use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchDomainError {
    #[error("query parameter \"q\" is required")]
    MissingSearchTerm,

    #[error("size must be between 1 and 20")]
    InvalidSuggestionSize,

    #[error("search index unavailable: {0}")]
    IndexUnavailable(String),

    #[error("unexpected search index response: {0}")]
    UnexpectedIndexResponse(String),
}
