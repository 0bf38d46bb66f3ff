//! PostgreSQL implementation of the identifier sequence.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::SequenceRepository;
use crate::error::{AppError, map_sqlx_error};

/// Name of the singleton counter row backing short identifier allocation.
pub const URL_ID_SEQUENCE: &str = "urlid";

/// PostgreSQL-backed atomic counter.
///
/// The increment-and-fetch is a single upsert statement, so the
/// no-duplicate-id guarantee holds under concurrent requests without any
/// application-side locking. A statement that fails leaves the counter
/// untouched.
pub struct PgSequenceRepository {
    pool: Arc<PgPool>,
}

impl PgSequenceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceRepository for PgSequenceRepository {
    async fn next_id(&self) -> Result<i64, AppError> {
        let seq = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO counters (name, seq)
            VALUES ($1, 1)
            ON CONFLICT (name) DO UPDATE SET seq = counters.seq + 1
            RETURNING seq
            "#,
        )
        .bind(URL_ID_SEQUENCE)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(seq)
    }
}
