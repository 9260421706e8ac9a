use crate::{
    catalog::domain::model::{
        enums::catalog_domain_error::CatalogDomainError, value_objects::curso_id::CursoId,
    },
    iam::domain::model::value_objects::tenant_id::TenantId,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CursoDetails {
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

impl CursoDetails {
    pub fn validated(mut self) -> Result<Self, CatalogDomainError> {
        self.nombre = self.nombre.trim().to_string();
        if self.nombre.is_empty() {
            return Err(CatalogDomainError::InvalidNombre);
        }
        if self.precio.is_some_and(|precio| precio < 0.0) {
            return Err(CatalogDomainError::NegativeValue("precio"));
        }
        if self.rating.is_some_and(|rating| rating < 0.0) {
            return Err(CatalogDomainError::NegativeValue("rating"));
        }
        if self.estudiantes.is_some_and(|estudiantes| estudiantes < 0) {
            return Err(CatalogDomainError::NegativeValue("estudiantes"));
        }

        self.categories = self
            .categories
            .into_iter()
            .map(|category| category.trim().to_string())
            .filter(|category| !category.is_empty())
            .collect();
        self.categories.dedup();

        Ok(self)
    }
}

/// Fields a `PUT` rewrites. Everything else on the stored curso is kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CursoRevision {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub duracion: Option<String>,
}

impl CursoRevision {
    pub fn validated(mut self) -> Result<Self, CatalogDomainError> {
        self.nombre = self.nombre.trim().to_string();
        if self.nombre.is_empty() {
            return Err(CatalogDomainError::InvalidNombre);
        }
        Ok(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Curso {
    tenant_id: TenantId,
    curso_id: CursoId,
    details: CursoDetails,
}

impl Curso {
    pub fn new(tenant_id: TenantId, curso_id: CursoId, details: CursoDetails) -> Self {
        Self {
            tenant_id,
            curso_id,
            details,
        }
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn curso_id(&self) -> &CursoId {
        &self.curso_id
    }

    pub fn details(&self) -> &CursoDetails {
        &self.details
    }

    pub fn revise(&mut self, revision: CursoRevision) {
        self.details.nombre = revision.nombre;
        self.details.descripcion = revision.descripcion;
        self.details.duracion = revision.duracion;
    }
}
