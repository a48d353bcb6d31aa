//! Connection pool construction.

use secrecy::ExposeSecret;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Builds a pool that connects on first use.
///
/// Only a malformed URL fails here; an unreachable server surfaces later as
/// query errors, which the idea lookup recovers from.
pub fn connect_lazy(config: &DatabaseConfig, url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect_lazy(url.expose_secret())
}

/// Applies the bundled migrations, which also seed the idea table.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
