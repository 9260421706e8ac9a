use async_trait::async_trait;

use crate::{
    iam::domain::model::value_objects::tenant_id::TenantId,
    search::domain::model::{
        entities::{
            course_document::CourseDocument,
            search_hit::{SearchResults, Suggestion},
        },
        enums::search_domain_error::SearchDomainError,
    },
};

#[async_trait]
pub trait SearchIndexRepository: Send + Sync {
    async fn match_by_name(
        &self,
        tenant_id: &TenantId,
        term: &str,
    ) -> Result<SearchResults, SearchDomainError>;

    async fn suggest_by_prefix(
        &self,
        tenant_id: &TenantId,
        prefix: &str,
        size: u32,
    ) -> Result<Vec<Suggestion>, SearchDomainError>;

    async fn upsert_document(&self, document: &CourseDocument) -> Result<(), SearchDomainError>;

    async fn delete_document(&self, document_id: &str) -> Result<(), SearchDomainError>;
}
