use crate::{
    catalog::domain::model::enums::catalog_domain_error::CatalogDomainError,
    iam::domain::model::value_objects::{resolved_identity::ResolvedIdentity, tenant_id::TenantId},
    shared::domain::model::value_objects::{page_cursor::PageCursor, page_limit::PageLimit},
};

#[derive(Clone, Debug)]
pub struct ListCursosQuery {
    tenant_id: TenantId,
    limit: PageLimit,
    after: Option<PageCursor>,
}

impl ListCursosQuery {
    pub fn new(
        identity: &ResolvedIdentity,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> Result<Self, CatalogDomainError> {
        let (limit, after) = page_window(identity, limit, cursor)?;

        Ok(Self {
            tenant_id: identity.tenant_id().clone(),
            limit,
            after,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn limit(&self) -> PageLimit {
        self.limit
    }
    pub fn after(&self) -> Option<&PageCursor> {
        self.after.as_ref()
    }
}

pub(crate) fn page_window(
    identity: &ResolvedIdentity,
    limit: Option<u32>,
    cursor: Option<String>,
) -> Result<(PageLimit, Option<PageCursor>), CatalogDomainError> {
    let limit = PageLimit::new(limit).map_err(CatalogDomainError::InvalidPageLimit)?;
    let after = cursor
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| PageCursor::decode(&raw, identity.tenant_id().as_str()))
        .transpose()
        .map_err(|_| CatalogDomainError::InvalidCursor)?;

    Ok((limit, after))
}
