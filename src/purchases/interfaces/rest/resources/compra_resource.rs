use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateCompraRequestResource {
    #[validate(length(min = 1, max = 128))]
    pub order_id: Option<String>,

    #[validate(length(min = 1, max = 128))]
    pub curso_id: String,

    #[validate(range(min = 1))]
    pub quantity: i32,

    #[validate(range(min = 0.0))]
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CompraResource {
    pub tenant_id: String,
    pub order_id: String,
    pub user_id: String,
    pub curso_id: String,
    pub quantity: i32,
    pub price: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CompraPageResource {
    pub items: Vec<CompraResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ListComprasQueryResource {
    pub user_id: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}
