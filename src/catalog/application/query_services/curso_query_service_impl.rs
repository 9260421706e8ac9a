use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    catalog::{
        domain::{
            model::{
                entities::curso::Curso,
                enums::catalog_domain_error::CatalogDomainError,
                queries::{
                    get_curso_by_id_query::GetCursoByIdQuery, list_cursos_query::ListCursosQuery,
                    search_cursos_by_category_query::SearchCursosByCategoryQuery,
                    search_cursos_by_name_query::SearchCursosByNameQuery,
                },
            },
            services::curso_query_service::CursoQueryService,
        },
        infrastructure::persistence::repositories::curso_repository::CursoRepository,
    },
    shared::domain::model::value_objects::page::Page,
};

pub struct CursoQueryServiceImpl {
    curso_repository: Arc<dyn CursoRepository>,
}

impl CursoQueryServiceImpl {
    pub fn new(curso_repository: Arc<dyn CursoRepository>) -> Self {
        Self { curso_repository }
    }
}

#[async_trait]
impl CursoQueryService for CursoQueryServiceImpl {
    async fn handle_get(&self, query: GetCursoByIdQuery) -> Result<Curso, CatalogDomainError> {
        self.curso_repository
            .find(query.tenant_id(), query.curso_id())
            .await?
            .ok_or(CatalogDomainError::CursoNotFound)
    }

    async fn handle_list(&self, query: ListCursosQuery) -> Result<Page<Curso>, CatalogDomainError> {
        let rows = self
            .curso_repository
            .list_page(
                query.tenant_id(),
                None,
                query.after().map(|cursor| cursor.key()),
                query.limit().fetch_size(),
            )
            .await?;

        Ok(Page::from_overfetch(
            rows,
            query.limit(),
            query.tenant_id().as_str(),
            |curso| curso.curso_id().value(),
        ))
    }

    async fn handle_search_by_name(
        &self,
        query: SearchCursosByNameQuery,
    ) -> Result<Page<Curso>, CatalogDomainError> {
        let rows = self
            .curso_repository
            .list_page(
                query.tenant_id(),
                Some(query.name()),
                query.after().map(|cursor| cursor.key()),
                query.limit().fetch_size(),
            )
            .await?;

        Ok(Page::from_overfetch(
            rows,
            query.limit(),
            query.tenant_id().as_str(),
            |curso| curso.curso_id().value(),
        ))
    }

    async fn handle_search_by_category(
        &self,
        query: SearchCursosByCategoryQuery,
    ) -> Result<Vec<Curso>, CatalogDomainError> {
        self.curso_repository
            .list_by_category(query.tenant_id(), query.category())
            .await
    }
}
