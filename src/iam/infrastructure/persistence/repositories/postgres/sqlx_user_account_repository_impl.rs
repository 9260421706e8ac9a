use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::iam::{
    domain::model::{
        entities::user_account::UserAccount,
        enums::iam_domain_error::IamDomainError,
        value_objects::{tenant_id::TenantId, user_id::UserId},
    },
    infrastructure::persistence::repositories::user_account_repository::UserAccountRepository,
};

pub struct SqlxUserAccountRepositoryImpl {
    pool: PgPool,
}

impl SqlxUserAccountRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn infra(error: sqlx::Error) -> IamDomainError {
    IamDomainError::InfrastructureError(error.to_string())
}

#[async_trait]
impl UserAccountRepository for SqlxUserAccountRepositoryImpl {
    async fn find(
        &self,
        tenant_id: &TenantId,
        user_id: &UserId,
    ) -> Result<Option<UserAccount>, IamDomainError> {
        let row = sqlx::query(
            r#"
            SELECT password_hash, created_at
            FROM users
            WHERE tenant_id = $1 AND user_id = $2
            "#,
        )
        .bind(tenant_id.as_str())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)?;

        row.map(|row| {
            Ok(UserAccount::new(
                tenant_id.clone(),
                user_id.clone(),
                row.try_get::<String, _>("password_hash").map_err(infra)?,
                row.try_get::<DateTime<Utc>, _>("created_at")
                    .map_err(infra)?,
            ))
        })
        .transpose()
    }

    async fn insert(&self, account: &UserAccount) -> Result<bool, IamDomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (tenant_id, user_id, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (tenant_id, user_id) DO NOTHING
            "#,
        )
        .bind(account.tenant_id().as_str())
        .bind(account.user_id().as_str())
        .bind(account.password_hash())
        .bind(account.created_at())
        .execute(&self.pool)
        .await
        .map_err(infra)?;

        Ok(result.rows_affected() == 1)
    }
}
