use crate::iam::domain::model::enums::iam_domain_error::IamDomainError;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(value: String) -> Result<Self, IamDomainError> {
        if value.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(IamDomainError::InvalidPassword);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(..)")
    }
}
