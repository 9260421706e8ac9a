use async_trait::async_trait;

use crate::{
    catalog::domain::model::{
        entities::curso::{Curso, CursoRevision},
        enums::catalog_domain_error::CatalogDomainError,
        value_objects::curso_id::CursoId,
    },
    iam::domain::model::value_objects::tenant_id::TenantId,
};

#[async_trait]
pub trait CursoRepository: Send + Sync {
    async fn insert(&self, curso: &Curso) -> Result<bool, CatalogDomainError>;

    async fn find(
        &self,
        tenant_id: &TenantId,
        curso_id: &CursoId,
    ) -> Result<Option<Curso>, CatalogDomainError>;

    async fn update(
        &self,
        tenant_id: &TenantId,
        curso_id: &CursoId,
        revision: &CursoRevision,
    ) -> Result<Option<Curso>, CatalogDomainError>;

    async fn delete(
        &self,
        tenant_id: &TenantId,
        curso_id: &CursoId,
    ) -> Result<bool, CatalogDomainError>;

    async fn list_page(
        &self,
        tenant_id: &TenantId,
        name_contains: Option<&str>,
        after: Option<&str>,
        fetch: i64,
    ) -> Result<Vec<Curso>, CatalogDomainError>;

    async fn list_by_category(
        &self,
        tenant_id: &TenantId,
        category: &str,
    ) -> Result<Vec<Curso>, CatalogDomainError>;
}
