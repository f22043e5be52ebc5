pub mod network;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::WiFiNetwork;

pub use network::NetworkRepository;

/// Persistence for WiFi network rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NetworkStore: Send + Sync {
    /// Insert a new row. Fails with `AppError::Conflict` if the id is taken.
    async fn insert(&self, network: &WiFiNetwork) -> Result<WiFiNetwork>;

    async fn find_by_id(&self, id: &str) -> Result<Option<WiFiNetwork>>;

    /// All rows, newest `created_at` first.
    async fn list_all(&self) -> Result<Vec<WiFiNetwork>>;

    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool>;
}
