use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    catalog::domain::model::value_objects::curso_id::CursoId,
    iam::domain::model::value_objects::{tenant_id::TenantId, user_id::UserId},
    purchases::{
        domain::model::{
            entities::compra::{Compra, CompraParts},
            enums::purchases_domain_error::PurchasesDomainError,
            value_objects::order_id::OrderId,
        },
        infrastructure::persistence::repositories::compra_repository::CompraRepository,
    },
};

pub struct SqlxCompraRepositoryImpl {
    pool: PgPool,
}

impl SqlxCompraRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &PgRow) -> Result<Compra, PurchasesDomainError> {
        let infra = |e: String| PurchasesDomainError::InfrastructureError(e);
        let column = |name: &str| -> Result<String, PurchasesDomainError> {
            row.try_get::<String, _>(name).map_err(|e| infra(e.to_string()))
        };

        Ok(Compra::new(CompraParts {
            tenant_id: TenantId::new(column("tenant_id")?).map_err(infra)?,
            order_id: OrderId::new(column("order_id")?)?,
            user_id: UserId::new(column("user_id")?).map_err(infra)?,
            curso_id: CursoId::new(column("curso_id")?)
                .map_err(|e| infra(e.to_string()))?,
            quantity: row
                .try_get::<i32, _>("quantity")
                .map_err(|e| infra(e.to_string()))?,
            price: row
                .try_get::<f64, _>("price")
                .map_err(|e| infra(e.to_string()))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| infra(e.to_string()))?,
        }))
    }
}

#[async_trait]
impl CompraRepository for SqlxCompraRepositoryImpl {
    async fn insert(&self, compra: &Compra) -> Result<bool, PurchasesDomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO compras (tenant_id, order_id, user_id, curso_id, quantity, price, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (tenant_id, order_id) DO NOTHING
            "#,
        )
        .bind(compra.tenant_id().as_str())
        .bind(compra.order_id().value())
        .bind(compra.user_id().as_str())
        .bind(compra.curso_id().value())
        .bind(compra.quantity())
        .bind(compra.price())
        .bind(compra.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| PurchasesDomainError::InfrastructureError(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }

    async fn list_page(
        &self,
        tenant_id: &TenantId,
        user_id: Option<&UserId>,
        after: Option<&str>,
        fetch: i64,
    ) -> Result<Vec<Compra>, PurchasesDomainError> {
        let rows = sqlx::query(
            r#"
            SELECT tenant_id, order_id, user_id, curso_id, quantity, price, created_at
            FROM compras
            WHERE tenant_id = $1
              AND ($2::TEXT IS NULL OR user_id = $2)
              AND ($3::TEXT IS NULL OR order_id > $3)
            ORDER BY order_id
            LIMIT $4
            "#,
        )
        .bind(tenant_id.as_str())
        .bind(user_id.map(|user_id| user_id.as_str()))
        .bind(after)
        .bind(fetch)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PurchasesDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(Self::map_row).collect()
    }
}
