use crate::{
    iam::domain::model::value_objects::{resolved_identity::ResolvedIdentity, tenant_id::TenantId},
    search::domain::model::{
        enums::search_domain_error::SearchDomainError,
        value_objects::{search_term::SearchTerm, suggestion_size::SuggestionSize},
    },
};

#[derive(Clone, Debug)]
pub struct AutocompleteCursosQuery {
    tenant_id: TenantId,
    prefix: SearchTerm,
    size: SuggestionSize,
}

impl AutocompleteCursosQuery {
    pub fn new(
        identity: &ResolvedIdentity,
        q: Option<String>,
        size: Option<u32>,
    ) -> Result<Self, SearchDomainError> {
        Ok(Self {
            tenant_id: identity.tenant_id().clone(),
            prefix: SearchTerm::new(q)?,
            size: SuggestionSize::new(size)?,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn prefix(&self) -> &SearchTerm {
        &self.prefix
    }
    pub fn size(&self) -> SuggestionSize {
        self.size
    }
}
