use crate::iam::domain::model::enums::iam_domain_error::IamDomainError;

pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, IamDomainError>;

    fn verify(&self, password: &str, password_hash: &str) -> bool;
}
