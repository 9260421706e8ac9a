use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenValidationStrategy {
    Direct,
    Delegated,
}

impl TokenValidationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenValidationStrategy::Direct => "direct",
            TokenValidationStrategy::Delegated => "delegated",
        }
    }
}

impl FromStr for TokenValidationStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(TokenValidationStrategy::Direct),
            "delegated" => Ok(TokenValidationStrategy::Delegated),
            other => Err(format!("unknown token validation strategy: {other}")),
        }
    }
}
