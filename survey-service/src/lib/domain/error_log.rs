//! Persistent record of internal failures.
//!
//! Every request that ends in a server error leaves one entry behind.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ErrorLogError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ErrorLogRepository: Send + Sync + 'static {
    /// Store `stack` with the current timestamp.
    async fn log_error(&self, stack: &str) -> Result<(), ErrorLogError>;
}
