use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LoginResponseResource {
    pub token: String,
    pub user_id: String,
    pub tenant_id: String,
    pub expires: String,
}
