use async_trait::async_trait;

use crate::search::domain::model::{
    entities::search_hit::{SearchResults, Suggestion},
    enums::search_domain_error::SearchDomainError,
    queries::{
        autocomplete_cursos_query::AutocompleteCursosQuery, search_cursos_query::SearchCursosQuery,
    },
};

#[async_trait]
pub trait SearchQueryService: Send + Sync {
    async fn handle_search(
        &self,
        query: SearchCursosQuery,
    ) -> Result<SearchResults, SearchDomainError>;

    async fn handle_autocomplete(
        &self,
        query: AutocompleteCursosQuery,
    ) -> Result<Vec<Suggestion>, SearchDomainError>;
}
