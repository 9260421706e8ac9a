use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SearchResponseResource {
    pub message: String,
    pub search_term: String,
    pub tenant_id: String,
    pub total: u64,
    pub results: Vec<SearchHitResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SearchHitResource {
    pub id: String,
    pub score: Option<f64>,
    #[schema(value_type = Object)]
    pub curso: Value,
}
