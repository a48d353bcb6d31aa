//! PostgreSQL implementation of StoreStatusProbe.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::ports::{StoreStatus, StoreStatusProbe};

/// Probes the database with a trivial query and lists public tables.
#[derive(Clone)]
pub struct PostgresStoreStatus {
    pool: PgPool,
}

impl PostgresStoreStatus {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreStatusProbe for PostgresStoreStatus {
    async fn check(&self) -> StoreStatus {
        let tables = sqlx::query_scalar::<_, String>(
            r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = 'public'
            ORDER BY table_name
            LIMIT 10
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        match tables {
            Ok(collections) => StoreStatus::connected(collections),
            Err(e) => {
                tracing::warn!("Store status check failed: {}", e);
                StoreStatus::failing(e.to_string())
            }
        }
    }
}
