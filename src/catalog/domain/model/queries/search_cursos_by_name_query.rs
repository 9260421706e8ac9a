use crate::{
    catalog::domain::model::{
        enums::catalog_domain_error::CatalogDomainError, queries::list_cursos_query::page_window,
    },
    iam::domain::model::value_objects::{resolved_identity::ResolvedIdentity, tenant_id::TenantId},
    shared::domain::model::value_objects::{page_cursor::PageCursor, page_limit::PageLimit},
};

#[derive(Clone, Debug)]
pub struct SearchCursosByNameQuery {
    tenant_id: TenantId,
    name: String,
    limit: PageLimit,
    after: Option<PageCursor>,
}

impl SearchCursosByNameQuery {
    pub fn new(
        identity: &ResolvedIdentity,
        name: Option<String>,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> Result<Self, CatalogDomainError> {
        let name = name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(CatalogDomainError::MissingSearchTerm("name"))?;
        let (limit, after) = page_window(identity, limit, cursor)?;

        Ok(Self {
            tenant_id: identity.tenant_id().clone(),
            name,
            limit,
            after,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn limit(&self) -> PageLimit {
        self.limit
    }
    pub fn after(&self) -> Option<&PageCursor> {
        self.after.as_ref()
    }
}
