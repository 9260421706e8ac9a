use std::sync::Arc;

use async_trait::async_trait;

use crate::search::{
    domain::{
        model::{
            entities::search_hit::{SearchResults, Suggestion},
            enums::search_domain_error::SearchDomainError,
            queries::{
                autocomplete_cursos_query::AutocompleteCursosQuery,
                search_cursos_query::SearchCursosQuery,
            },
        },
        services::search_query_service::SearchQueryService,
    },
    infrastructure::index::repositories::search_index_repository::SearchIndexRepository,
};

pub struct SearchQueryServiceImpl {
    index_repository: Arc<dyn SearchIndexRepository>,
}

impl SearchQueryServiceImpl {
    pub fn new(index_repository: Arc<dyn SearchIndexRepository>) -> Self {
        Self { index_repository }
    }
}

#[async_trait]
impl SearchQueryService for SearchQueryServiceImpl {
    async fn handle_search(
        &self,
        query: SearchCursosQuery,
    ) -> Result<SearchResults, SearchDomainError> {
        self.index_repository
            .match_by_name(query.tenant_id(), query.term().value())
            .await
    }

    async fn handle_autocomplete(
        &self,
        query: AutocompleteCursosQuery,
    ) -> Result<Vec<Suggestion>, SearchDomainError> {
        if query.prefix().is_too_short_for_prefix() {
            return Ok(Vec::new());
        }

        self.index_repository
            .suggest_by_prefix(query.tenant_id(), query.prefix().value(), query.size().value())
            .await
    }
}
