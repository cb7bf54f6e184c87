use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::debug;

/// Open the store, creating the database file if it does not exist yet.
///
/// The pool holds a single connection: one writer, one process. An in-memory database
/// lives only as long as its connection, so that connection is never retired.
pub async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("parse database url {database_url}"))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("connect to database")?;

    debug!(%database_url, "database connected");
    Ok(pool)
}

/// Create the schema if absent. Safe to run on every start.
pub async fn migrate(db: &SqlitePool) -> crate::error::Result<()> {
    sqlx::migrate!("./migrations").run(db).await?;
    Ok(())
}
