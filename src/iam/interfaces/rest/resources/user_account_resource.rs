use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserAccountResource {
    pub tenant_id: String,
    pub user_id: String,
    pub created_at: String,
}
