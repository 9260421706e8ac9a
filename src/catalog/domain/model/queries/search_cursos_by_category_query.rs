use crate::{
    catalog::domain::model::enums::catalog_domain_error::CatalogDomainError,
    iam::domain::model::value_objects::{resolved_identity::ResolvedIdentity, tenant_id::TenantId},
};

#[derive(Clone, Debug)]
pub struct SearchCursosByCategoryQuery {
    tenant_id: TenantId,
    category: String,
}

impl SearchCursosByCategoryQuery {
    pub fn new(
        identity: &ResolvedIdentity,
        category: Option<String>,
    ) -> Result<Self, CatalogDomainError> {
        let category = category
            .map(|category| category.trim().to_string())
            .filter(|category| !category.is_empty())
            .ok_or(CatalogDomainError::MissingSearchTerm("category"))?;

        Ok(Self {
            tenant_id: identity.tenant_id().clone(),
            category,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn category(&self) -> &str {
        &self.category
    }
}
