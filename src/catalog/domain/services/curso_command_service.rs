use async_trait::async_trait;

use crate::catalog::domain::model::{
    commands::{
        create_curso_command::CreateCursoCommand, delete_curso_command::DeleteCursoCommand,
        update_curso_command::UpdateCursoCommand,
    },
    entities::curso::Curso,
    enums::catalog_domain_error::CatalogDomainError,
};

#[async_trait]
pub trait CursoCommandService: Send + Sync {
    async fn handle_create(&self, command: CreateCursoCommand) -> Result<Curso, CatalogDomainError>;

    async fn handle_update(&self, command: UpdateCursoCommand) -> Result<Curso, CatalogDomainError>;

    async fn handle_delete(&self, command: DeleteCursoCommand) -> Result<(), CatalogDomainError>;
}
