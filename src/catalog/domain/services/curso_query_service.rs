use async_trait::async_trait;

use crate::{
    catalog::domain::model::{
        entities::curso::Curso,
        enums::catalog_domain_error::CatalogDomainError,
        queries::{
            get_curso_by_id_query::GetCursoByIdQuery, list_cursos_query::ListCursosQuery,
            search_cursos_by_category_query::SearchCursosByCategoryQuery,
            search_cursos_by_name_query::SearchCursosByNameQuery,
        },
    },
    shared::domain::model::value_objects::page::Page,
};

#[async_trait]
pub trait CursoQueryService: Send + Sync {
    async fn handle_get(&self, query: GetCursoByIdQuery) -> Result<Curso, CatalogDomainError>;

    async fn handle_list(&self, query: ListCursosQuery) -> Result<Page<Curso>, CatalogDomainError>;

    async fn handle_search_by_name(
        &self,
        query: SearchCursosByNameQuery,
    ) -> Result<Page<Curso>, CatalogDomainError>;

    async fn handle_search_by_category(
        &self,
        query: SearchCursosByCategoryQuery,
    ) -> Result<Vec<Curso>, CatalogDomainError>;
}
