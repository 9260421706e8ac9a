use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CursoResource {
    pub tenant_id: String,
    pub curso_id: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub duracion: Option<String>,
    pub precio: Option<f64>,
    pub rating: Option<f64>,
    pub imagen_url: Option<String>,
    pub instructor: Option<String>,
    pub nivel: Option<String>,
    pub estudiantes: Option<i64>,
    pub categories: Vec<String>,
}
