use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};

use crate::{
    iam::{
        domain::model::{
            enums::auth_error::AuthError, value_objects::resolved_identity::ResolvedIdentity,
        },
        interfaces::acl::token_gate_facade::TokenGateFacade,
    },
    shared::interfaces::rest::resources::error_response_resource::{RestError, rest_error},
};

pub const MISSING_TOKEN_MESSAGE: &str = "authorization token not provided";
pub const REJECTED_TOKEN_MESSAGE: &str = "token is invalid or expired";
pub const UNAVAILABLE_MESSAGE: &str = "token validation is temporarily unavailable";

pub async fn authenticate_request(
    gate: &dyn TokenGateFacade,
    headers: &HeaderMap,
) -> Result<ResolvedIdentity, RestError> {
    let raw = match headers.get(AUTHORIZATION) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(value) => Some(value),
            Err(_) => {
                return Err(map_auth_error(&AuthError::Malformed(
                    "authorization header is not valid text".to_string(),
                )));
            }
        },
    };

    gate.authenticate(raw)
        .await
        .map_err(|error| map_auth_error(&error))
}

/// Missing credential is 401. Unknown, expired and malformed tokens share one
/// 403 answer so a caller cannot tell them apart.
pub fn map_auth_error(error: &AuthError) -> RestError {
    let (status, message) = match error {
        AuthError::MissingCredential => (StatusCode::UNAUTHORIZED, MISSING_TOKEN_MESSAGE),
        AuthError::NotFound | AuthError::Expired | AuthError::Malformed(_) => {
            (StatusCode::FORBIDDEN, REJECTED_TOKEN_MESSAGE)
        }
        AuthError::UpstreamUnavailable(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_MESSAGE)
        }
    };

    rest_error(status, message)
}
