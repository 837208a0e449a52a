use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a bounded Postgres pool. The pool is handed to handlers as axum
/// state; nothing else in the crate holds a connection.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;
    Ok(pool)
}
