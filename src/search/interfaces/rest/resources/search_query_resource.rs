use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct SearchQueryResource {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct AutocompleteQueryResource {
    pub q: Option<String>,
    pub size: Option<u32>,
}
