use crate::{
    iam::domain::model::value_objects::{resolved_identity::ResolvedIdentity, tenant_id::TenantId},
    search::domain::model::{
        enums::search_domain_error::SearchDomainError, value_objects::search_term::SearchTerm,
    },
};

#[derive(Clone, Debug)]
pub struct SearchCursosQuery {
    tenant_id: TenantId,
    term: SearchTerm,
}

impl SearchCursosQuery {
    pub fn new(identity: &ResolvedIdentity, q: Option<String>) -> Result<Self, SearchDomainError> {
        Ok(Self {
            tenant_id: identity.tenant_id().clone(),
            term: SearchTerm::new(q)?,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn term(&self) -> &SearchTerm {
        &self.term
    }
}
