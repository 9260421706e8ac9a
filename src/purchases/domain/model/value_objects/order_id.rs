use regex::Regex;
use uuid::Uuid;

use crate::purchases::domain::model::enums::purchases_domain_error::PurchasesDomainError;

lazy_static::lazy_static! {
    static ref ORDER_ID_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,127}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(value: String) -> Result<Self, PurchasesDomainError> {
        let trimmed = value.trim();
        if !ORDER_ID_REGEX.is_match(trimmed) {
            return Err(PurchasesDomainError::InvalidOrderId);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
