use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LoginRequestResource {
    pub tenant_id: String,
    pub user_id: String,
    pub password: String,
}
