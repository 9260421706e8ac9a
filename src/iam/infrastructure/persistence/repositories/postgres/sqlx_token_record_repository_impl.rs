use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::iam::{
    domain::model::entities::token_record::TokenRecord,
    infrastructure::persistence::repositories::token_record_repository::TokenRecordRepository,
};

pub struct SqlxTokenRecordRepositoryImpl {
    pool: PgPool,
}

impl SqlxTokenRecordRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRecordRepository for SqlxTokenRecordRepositoryImpl {
    async fn find_by_token(&self, token: &str) -> Result<Option<TokenRecord>, String> {
        let row = sqlx::query(
            r#"
            SELECT token, tenant_id, user_id, expires
            FROM access_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| e.to_string())?;

        row.map(|row| {
            Ok(TokenRecord::restore(
                row.try_get::<String, _>("token").map_err(|e| e.to_string())?,
                row.try_get::<Option<String>, _>("tenant_id")
                    .map_err(|e| e.to_string())?,
                row.try_get::<Option<String>, _>("user_id")
                    .map_err(|e| e.to_string())?,
                row.try_get::<Option<String>, _>("expires")
                    .map_err(|e| e.to_string())?,
            ))
        })
        .transpose()
    }

    async fn save(&self, record: &TokenRecord) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO access_tokens (token, tenant_id, user_id, expires)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (token)
            DO UPDATE SET
                tenant_id = EXCLUDED.tenant_id,
                user_id = EXCLUDED.user_id,
                expires = EXCLUDED.expires
            "#,
        )
        .bind(record.token())
        .bind(record.tenant_id())
        .bind(record.user_id())
        .bind(record.expires())
        .execute(&self.pool)
        .await
        .map_err(|e| e.to_string())?;

        Ok(())
    }
}
