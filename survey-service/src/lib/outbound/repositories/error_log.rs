use async_trait::async_trait;
use sqlx::PgPool;

use crate::error_log::ErrorLogError;
use crate::error_log::ErrorLogRepository;

pub struct PostgresErrorLogRepository {
    pool: PgPool,
}

impl PostgresErrorLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ErrorLogRepository for PostgresErrorLogRepository {
    async fn log_error(&self, stack: &str) -> Result<(), ErrorLogError> {
        sqlx::query("INSERT INTO error_logs (stack, created_at) VALUES ($1, NOW())")
            .bind(stack)
            .execute(&self.pool)
            .await
            .map_err(|e| ErrorLogError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
