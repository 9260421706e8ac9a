use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AutocompleteResponseResource {
    pub message: String,
    pub prefix: String,
    pub suggestions_count: usize,
    pub suggestions: Vec<SuggestionResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SuggestionResource {
    pub text: String,
    pub score: Option<f64>,
    #[schema(value_type = Object)]
    pub curso: Value,
}
