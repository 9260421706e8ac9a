use crate::{
    iam::domain::model::value_objects::{
        resolved_identity::ResolvedIdentity, tenant_id::TenantId, user_id::UserId,
    },
    purchases::domain::model::enums::purchases_domain_error::PurchasesDomainError,
    shared::domain::model::value_objects::{page_cursor::PageCursor, page_limit::PageLimit},
};

#[derive(Clone, Debug)]
pub struct ListComprasQuery {
    tenant_id: TenantId,
    user_id: Option<UserId>,
    limit: PageLimit,
    after: Option<PageCursor>,
}

impl ListComprasQuery {
    pub fn new(
        identity: &ResolvedIdentity,
        user_id: Option<String>,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> Result<Self, PurchasesDomainError> {
        let user_id = user_id
            .filter(|value| !value.trim().is_empty())
            .map(|value| UserId::new(value).map_err(|_| PurchasesDomainError::InvalidUserId))
            .transpose()?;
        let limit = PageLimit::new(limit).map_err(PurchasesDomainError::InvalidPageLimit)?;
        let after = cursor
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| PageCursor::decode(&raw, identity.tenant_id().as_str()))
            .transpose()
            .map_err(|_| PurchasesDomainError::InvalidCursor)?;

        Ok(Self {
            tenant_id: identity.tenant_id().clone(),
            user_id,
            limit,
            after,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }
    pub fn limit(&self) -> PageLimit {
        self.limit
    }
    pub fn after(&self) -> Option<&PageCursor> {
        self.after.as_ref()
    }
}
