use sha2::{Digest, Sha256};

use crate::iam::domain::model::enums::auth_error::AuthError;

const BEARER_SCHEME: &str = "Bearer";

/// Token extracted from an `Authorization` value.
///
/// Grammar: `[scheme SP+] token`, surrounding whitespace ignored. The only
/// accepted scheme is `Bearer` (any case); a bare token is taken as-is. The
/// token itself may not contain whitespace.
#[derive(Clone, Eq, PartialEq)]
pub struct BearerCredential(String);

impl BearerCredential {
    pub fn parse(raw: Option<&str>) -> Result<Self, AuthError> {
        let raw = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingCredential)?;

        let token = match raw.split_once(char::is_whitespace) {
            Some((scheme, rest)) => {
                if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
                    return Err(AuthError::Malformed(
                        "unsupported authorization scheme".to_string(),
                    ));
                }
                rest.trim()
            }
            None if raw.eq_ignore_ascii_case(BEARER_SCHEME) => {
                return Err(AuthError::MissingCredential);
            }
            None => raw,
        };

        if token.chars().any(char::is_whitespace) {
            return Err(AuthError::Malformed(
                "token contains whitespace".to_string(),
            ));
        }

        Ok(Self(token.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(&digest[..6])
    }
}

impl std::fmt::Debug for BearerCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BearerCredential({})", self.fingerprint())
    }
}
