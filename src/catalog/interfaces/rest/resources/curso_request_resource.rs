use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::catalog::domain::model::entities::curso::{CursoDetails, CursoRevision};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateCursoRequestResource {
    #[validate(length(min = 1, max = 128))]
    pub curso_id: String,

    #[serde(flatten)]
    #[validate(nested)]
    pub details: CursoDetailsRequestResource,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct CursoDetailsRequestResource {
    #[validate(length(min = 1, max = 256))]
    pub nombre: String,

    #[validate(length(max = 4000))]
    pub descripcion: Option<String>,

    pub duracion: Option<String>,

    #[validate(range(min = 0.0))]
    pub precio: Option<f64>,

    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,

    #[validate(url)]
    pub imagen_url: Option<String>,

    pub instructor: Option<String>,

    pub nivel: Option<String>,

    #[validate(range(min = 0))]
    pub estudiantes: Option<i64>,

    #[serde(default)]
    pub categories: Vec<String>,
}

impl From<CursoDetailsRequestResource> for CursoDetails {
    fn from(resource: CursoDetailsRequestResource) -> Self {
        Self {
            nombre: resource.nombre,
            descripcion: resource.descripcion,
            duracion: resource.duracion,
            precio: resource.precio,
            rating: resource.rating,
            imagen_url: resource.imagen_url,
            instructor: resource.instructor,
            nivel: resource.nivel,
            estudiantes: resource.estudiantes,
            categories: resource.categories,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateCursoRequestResource {
    #[validate(length(min = 1, max = 256))]
    pub nombre: String,

    #[validate(length(max = 4000))]
    pub descripcion: Option<String>,

    pub duracion: Option<String>,
}

impl From<UpdateCursoRequestResource> for CursoRevision {
    fn from(resource: UpdateCursoRequestResource) -> Self {
        Self {
            nombre: resource.nombre,
            descripcion: resource.descripcion,
            duracion: resource.duracion,
        }
    }
}
