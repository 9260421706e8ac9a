use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::interfaces::rest::resources::curso_resource::CursoResource;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CursoPageResource {
    pub items: Vec<CursoResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}
