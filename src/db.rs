use crate::config::Config;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(config: &Config) -> Result<DbPool> {
    let max_connections = config.database.max_connections.unwrap_or(10);

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&config.database.url)
        .await?;

    Ok(pool)
}

/// Create the `wifi_networks` table if it does not exist yet.
pub async fn ensure_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS wifi_networks (
            id           TEXT        PRIMARY KEY,
            ssid         TEXT        NOT NULL,
            bssid        TEXT,
            password     TEXT,
            capabilities TEXT        NOT NULL,
            notes        TEXT        NOT NULL DEFAULT '',
            frequency    INTEGER     NOT NULL DEFAULT 0,
            level        INTEGER     NOT NULL DEFAULT 0,
            is_connected BOOLEAN     NOT NULL DEFAULT FALSE,
            ip_address   TEXT,
            ipv6_address TEXT,
            subnet       TEXT,
            gateway      TEXT,
            broadcast    TEXT,
            created_at   TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS wifi_networks_created_at_idx ON wifi_networks (created_at DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
