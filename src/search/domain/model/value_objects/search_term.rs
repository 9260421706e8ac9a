use crate::search::domain::model::enums::search_domain_error::SearchDomainError;

pub const MIN_PREFIX_CHARS: usize = 2;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(value: Option<String>) -> Result<Self, SearchDomainError> {
        value
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(Self)
            .ok_or(SearchDomainError::MissingSearchTerm)
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_too_short_for_prefix(&self) -> bool {
        self.0.chars().count() < MIN_PREFIX_CHARS
    }
}
