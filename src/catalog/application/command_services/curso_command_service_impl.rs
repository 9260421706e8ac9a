use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{
    domain::{
        model::{
            commands::{
                create_curso_command::CreateCursoCommand,
                delete_curso_command::DeleteCursoCommand,
                update_curso_command::UpdateCursoCommand,
            },
            entities::curso::Curso,
            enums::catalog_domain_error::CatalogDomainError,
        },
        services::curso_command_service::CursoCommandService,
    },
    infrastructure::persistence::repositories::curso_repository::CursoRepository,
};

pub struct CursoCommandServiceImpl {
    curso_repository: Arc<dyn CursoRepository>,
}

impl CursoCommandServiceImpl {
    pub fn new(curso_repository: Arc<dyn CursoRepository>) -> Self {
        Self { curso_repository }
    }
}

#[async_trait]
impl CursoCommandService for CursoCommandServiceImpl {
    async fn handle_create(&self, command: CreateCursoCommand) -> Result<Curso, CatalogDomainError> {
        let curso = Curso::new(
            command.tenant_id().clone(),
            command.curso_id().clone(),
            command.details().clone(),
        );

        if !self.curso_repository.insert(&curso).await? {
            return Err(CatalogDomainError::CursoAlreadyExists);
        }

        tracing::info!(tenant_id = %curso.tenant_id(), curso_id = %curso.curso_id(), "curso created");
        Ok(curso)
    }

    async fn handle_update(&self, command: UpdateCursoCommand) -> Result<Curso, CatalogDomainError> {
        let curso = self
            .curso_repository
            .update(command.tenant_id(), command.curso_id(), command.revision())
            .await?
            .ok_or(CatalogDomainError::CursoNotFound)?;

        tracing::info!(tenant_id = %curso.tenant_id(), curso_id = %curso.curso_id(), "curso updated");
        Ok(curso)
    }

    async fn handle_delete(&self, command: DeleteCursoCommand) -> Result<(), CatalogDomainError> {
        let deleted = self
            .curso_repository
            .delete(command.tenant_id(), command.curso_id())
            .await?;

        if !deleted {
            return Err(CatalogDomainError::CursoNotFound);
        }

        tracing::info!(tenant_id = %command.tenant_id(), curso_id = %command.curso_id(), "curso deleted");
        Ok(())
    }
}
