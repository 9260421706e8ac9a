use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponseResource {
    #[schema(example = "token is invalid or expired")]
    pub message: String,
}

pub type RestError = (StatusCode, Json<ErrorResponseResource>);

pub fn rest_error(status: StatusCode, message: impl Into<String>) -> RestError {
    (
        status,
        Json(ErrorResponseResource {
            message: message.into(),
        }),
    )
}
