use async_trait::async_trait;

use super::NetworkStore;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::WiFiNetwork;

const COLUMNS: &str = "id, ssid, bssid, password, capabilities, notes, frequency, level, \
     is_connected, ip_address, ipv6_address, subnet, gateway, broadcast, created_at";

#[derive(Clone)]
pub struct NetworkRepository {
    pool: DbPool,
}

impl NetworkRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NetworkStore for NetworkRepository {
    async fn insert(&self, network: &WiFiNetwork) -> Result<WiFiNetwork> {
        let query = format!(
            r#"
            INSERT INTO wifi_networks ({COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {COLUMNS}
            "#
        );

        let stored = sqlx::query_as::<_, WiFiNetwork>(&query)
            .bind(&network.id)
            .bind(&network.ssid)
            .bind(&network.bssid)
            .bind(&network.password)
            .bind(&network.capabilities)
            .bind(&network.notes)
            .bind(network.frequency)
            .bind(network.level)
            .bind(network.is_connected)
            .bind(&network.ip_address)
            .bind(&network.ipv6_address)
            .bind(&network.subnet)
            .bind(&network.gateway)
            .bind(&network.broadcast)
            .bind(network.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    AppError::Conflict(format!("Network {} already exists", network.id))
                }
                other => AppError::Database(other),
            })?;

        Ok(stored)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<WiFiNetwork>> {
        let query = format!("SELECT {COLUMNS} FROM wifi_networks WHERE id = $1");

        let network = sqlx::query_as::<_, WiFiNetwork>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(network)
    }

    async fn list_all(&self) -> Result<Vec<WiFiNetwork>> {
        let query = format!("SELECT {COLUMNS} FROM wifi_networks ORDER BY created_at DESC, id");

        let networks = sqlx::query_as::<_, WiFiNetwork>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(networks)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM wifi_networks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
