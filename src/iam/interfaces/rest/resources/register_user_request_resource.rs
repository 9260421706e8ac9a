use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RegisterUserRequestResource {
    #[validate(length(min = 1, max = 128))]
    pub tenant_id: String,

    #[validate(length(min = 1, max = 128))]
    pub user_id: String,

    #[validate(length(min = 8, max = 256))]
    pub password: String,
}
