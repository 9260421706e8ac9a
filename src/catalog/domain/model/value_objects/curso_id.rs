use regex::Regex;

use crate::catalog::domain::model::enums::catalog_domain_error::CatalogDomainError;

lazy_static::lazy_static! {
    static ref CURSO_ID_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,127}$").expect("valid regex");
}

const RESERVED_CURSO_IDS: [&str; 2] = ["search", "autocomplete"];

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CursoId(String);

impl CursoId {
    pub fn new(value: String) -> Result<Self, CatalogDomainError> {
        let trimmed = value.trim();
        if !CURSO_ID_REGEX.is_match(trimmed) || RESERVED_CURSO_IDS.contains(&trimmed) {
            return Err(CatalogDomainError::InvalidCursoId);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CursoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
