use crate::{
    catalog::domain::model::{
        enums::catalog_domain_error::CatalogDomainError, value_objects::curso_id::CursoId,
    },
    iam::domain::model::value_objects::{resolved_identity::ResolvedIdentity, tenant_id::TenantId},
};

#[derive(Clone, Debug)]
pub struct DeleteCursoCommand {
    tenant_id: TenantId,
    curso_id: CursoId,
}

impl DeleteCursoCommand {
    pub fn new(identity: &ResolvedIdentity, curso_id: String) -> Result<Self, CatalogDomainError> {
        Ok(Self {
            tenant_id: identity.tenant_id().clone(),
            curso_id: CursoId::new(curso_id)?,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn curso_id(&self) -> &CursoId {
        &self.curso_id
    }
}
