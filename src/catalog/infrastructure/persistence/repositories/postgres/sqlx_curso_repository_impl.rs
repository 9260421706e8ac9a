use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    catalog::{
        domain::model::{
            entities::curso::{Curso, CursoDetails, CursoRevision},
            enums::catalog_domain_error::CatalogDomainError,
            value_objects::curso_id::CursoId,
        },
        infrastructure::persistence::repositories::curso_repository::CursoRepository,
    },
    iam::domain::model::value_objects::tenant_id::TenantId,
};

const CURSO_COLUMNS: &str = "tenant_id, curso_id, nombre, descripcion, duracion, precio, rating, \
     imagen_url, instructor, nivel, estudiantes, categories";

pub struct SqlxCursoRepositoryImpl {
    pool: PgPool,
}

impl SqlxCursoRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &PgRow) -> Result<Curso, CatalogDomainError> {
        let infra = |e: sqlx::Error| CatalogDomainError::InfrastructureError(e.to_string());

        let tenant_id = TenantId::new(row.try_get::<String, _>("tenant_id").map_err(infra)?)
            .map_err(CatalogDomainError::InfrastructureError)?;
        let curso_id = CursoId::new(row.try_get::<String, _>("curso_id").map_err(infra)?)?;

        Ok(Curso::new(
            tenant_id,
            curso_id,
            CursoDetails {
                nombre: row.try_get("nombre").map_err(infra)?,
                descripcion: row.try_get("descripcion").map_err(infra)?,
                duracion: row.try_get("duracion").map_err(infra)?,
                precio: row.try_get("precio").map_err(infra)?,
                rating: row.try_get("rating").map_err(infra)?,
                imagen_url: row.try_get("imagen_url").map_err(infra)?,
                instructor: row.try_get("instructor").map_err(infra)?,
                nivel: row.try_get("nivel").map_err(infra)?,
                estudiantes: row.try_get("estudiantes").map_err(infra)?,
                categories: row.try_get("categories").map_err(infra)?,
            },
        ))
    }
}

fn like_pattern(fragment: &str) -> String {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl CursoRepository for SqlxCursoRepositoryImpl {
    async fn insert(&self, curso: &Curso) -> Result<bool, CatalogDomainError> {
        let details = curso.details();
        let result = sqlx::query(
            r#"
            INSERT INTO cursos (
                tenant_id, curso_id, nombre, descripcion, duracion, precio, rating,
                imagen_url, instructor, nivel, estudiantes, categories
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (tenant_id, curso_id) DO NOTHING
            "#,
        )
        .bind(curso.tenant_id().as_str())
        .bind(curso.curso_id().value())
        .bind(&details.nombre)
        .bind(&details.descripcion)
        .bind(&details.duracion)
        .bind(details.precio)
        .bind(details.rating)
        .bind(&details.imagen_url)
        .bind(&details.instructor)
        .bind(&details.nivel)
        .bind(details.estudiantes)
        .bind(&details.categories)
        .execute(&self.pool)
        .await
        .map_err(|e| CatalogDomainError::InfrastructureError(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }

    async fn find(
        &self,
        tenant_id: &TenantId,
        curso_id: &CursoId,
    ) -> Result<Option<Curso>, CatalogDomainError> {
        let sql = format!("SELECT {CURSO_COLUMNS} FROM cursos WHERE tenant_id = $1 AND curso_id = $2");
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_str())
            .bind(curso_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogDomainError::InfrastructureError(e.to_string()))?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn update(
        &self,
        tenant_id: &TenantId,
        curso_id: &CursoId,
        revision: &CursoRevision,
    ) -> Result<Option<Curso>, CatalogDomainError> {
        let sql = format!(
            r#"
            UPDATE cursos SET nombre = $3, descripcion = $4, duracion = $5
            WHERE tenant_id = $1 AND curso_id = $2
            RETURNING {CURSO_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(tenant_id.as_str())
            .bind(curso_id.value())
            .bind(&revision.nombre)
            .bind(&revision.descripcion)
            .bind(&revision.duracion)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogDomainError::InfrastructureError(e.to_string()))?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn delete(
        &self,
        tenant_id: &TenantId,
        curso_id: &CursoId,
    ) -> Result<bool, CatalogDomainError> {
        let result = sqlx::query("DELETE FROM cursos WHERE tenant_id = $1 AND curso_id = $2")
            .bind(tenant_id.as_str())
            .bind(curso_id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogDomainError::InfrastructureError(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }

    async fn list_page(
        &self,
        tenant_id: &TenantId,
        name_contains: Option<&str>,
        after: Option<&str>,
        fetch: i64,
    ) -> Result<Vec<Curso>, CatalogDomainError> {
        let sql = format!(
            r#"
            SELECT {CURSO_COLUMNS}
            FROM cursos
            WHERE tenant_id = $1
              AND ($2::TEXT IS NULL OR nombre ILIKE $2)
              AND ($3::TEXT IS NULL OR curso_id > $3)
            ORDER BY curso_id
            LIMIT $4
            "#
        );

        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_str())
            .bind(name_contains.map(like_pattern))
            .bind(after)
            .bind(fetch)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn list_by_category(
        &self,
        tenant_id: &TenantId,
        category: &str,
    ) -> Result<Vec<Curso>, CatalogDomainError> {
        let sql = format!(
            "SELECT {CURSO_COLUMNS} FROM cursos \
             WHERE tenant_id = $1 AND $2 = ANY(categories) ORDER BY curso_id"
        );

        let rows = sqlx::query(&sql)
            .bind(tenant_id.as_str())
            .bind(category)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(Self::map_row).collect()
    }
}
