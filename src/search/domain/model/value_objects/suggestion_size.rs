use crate::search::domain::model::enums::search_domain_error::SearchDomainError;

pub const DEFAULT_SUGGESTION_SIZE: u32 = 5;
pub const MAX_SUGGESTION_SIZE: u32 = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SuggestionSize(u32);

impl SuggestionSize {
    pub fn new(value: Option<u32>) -> Result<Self, SearchDomainError> {
        match value {
            None => Ok(Self(DEFAULT_SUGGESTION_SIZE)),
            Some(size) if (1..=MAX_SUGGESTION_SIZE).contains(&size) => Ok(Self(size)),
            Some(_) => Err(SearchDomainError::InvalidSuggestionSize),
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}
