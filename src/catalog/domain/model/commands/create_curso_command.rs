use crate::{
    catalog::domain::model::{
        entities::curso::CursoDetails, enums::catalog_domain_error::CatalogDomainError,
        value_objects::curso_id::CursoId,
    },
    iam::domain::model::value_objects::{resolved_identity::ResolvedIdentity, tenant_id::TenantId},
};

#[derive(Clone, Debug)]
pub struct CreateCursoCommand {
    tenant_id: TenantId,
    curso_id: CursoId,
    details: CursoDetails,
}

impl CreateCursoCommand {
    pub fn new(
        identity: &ResolvedIdentity,
        curso_id: String,
        details: CursoDetails,
    ) -> Result<Self, CatalogDomainError> {
        Ok(Self {
            tenant_id: identity.tenant_id().clone(),
            curso_id: CursoId::new(curso_id)?,
            details: details.validated()?,
        })
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
}
