use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::error::{AppError, Result};
use crate::id::{IdGenerator, UuidGenerator};
use crate::models::{NewWiFiNetwork, WiFiNetwork, DEFAULT_CAPABILITIES};
use crate::normalize::created_at_or;
use crate::repositories::NetworkStore;

#[derive(Clone)]
pub struct NetworkService {
    store: Arc<dyn NetworkStore>,
    ids: Arc<dyn IdGenerator>,
}

impl NetworkService {
    pub fn new(store: Arc<dyn NetworkStore>) -> Self {
        Self::with_id_generator(store, Arc::new(UuidGenerator))
    }

    pub fn with_id_generator(store: Arc<dyn NetworkStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    pub async fn get_all(&self) -> Result<Vec<WiFiNetwork>> {
        self.store.list_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<WiFiNetwork>> {
        self.store.find_by_id(id).await
    }

    pub async fn add(&self, network: NewWiFiNetwork) -> Result<WiFiNetwork> {
        let id = if network.id.is_empty() {
            self.ids.generate()
        } else {
            network.id.clone()
        };

        if network.ssid.is_empty() {
            return Err(AppError::Validation("SSID is required".to_string()));
        }

        let capabilities = if network.capabilities.is_empty() {
            DEFAULT_CAPABILITIES.to_string()
        } else {
            network.capabilities.clone()
        };

        let created_at = created_at_or(network.created_at, Utc::now());

        let record = network.into_record(id, capabilities, created_at);
        let stored = self.store.insert(&record).await?;

        info!(ssid = %stored.ssid, id = %stored.id, "Added network");
        Ok(stored)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        if self.store.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let deleted = self.store.delete_by_id(id).await?;
        if deleted {
            info!(id = %id, "Deleted network");
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::RawTimestamp;
    use crate::repositories::MockNetworkStore;
    use chrono::{DateTime, Duration, TimeZone};
    use pretty_assertions::assert_eq;

    struct FixedId(&'static str);

    impl IdGenerator for FixedId {
        fn generate(&self) -> String {
            self.0.to_string()
        }
    }

    fn echo_insert(store: &mut MockNetworkStore) {
        store
            .expect_insert()
            .times(1)
            .returning(|network: &WiFiNetwork| Ok(network.clone()));
    }

    fn service(store: MockNetworkStore) -> NetworkService {
        NetworkService::with_id_generator(Arc::new(store), Arc::new(FixedId("generated-1")))
    }

    fn sample(id: &str, created_at: DateTime<Utc>) -> WiFiNetwork {
        NewWiFiNetwork::with_ssid("HomeNet").into_record(
            id.to_string(),
            DEFAULT_CAPABILITIES.to_string(),
            created_at,
        )
    }

    #[tokio::test]
    async fn test_add_fills_defaults() {
        let mut store = MockNetworkStore::new();
        echo_insert(&mut store);

        let before = Utc::now();
        let stored = service(store)
            .add(NewWiFiNetwork::with_ssid("HomeNet"))
            .await
            .unwrap();

        assert_eq!(stored.id, "generated-1");
        assert_eq!(stored.ssid, "HomeNet");
        assert_eq!(stored.capabilities, "Unknown");
        assert!(stored.created_at >= before);
        assert!(stored.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_add_keeps_supplied_values() {
        let mut store = MockNetworkStore::new();
        echo_insert(&mut store);

        let network = NewWiFiNetwork {
            id: "client-id".to_string(),
            capabilities: "[WPA2-PSK-CCMP][ESS]".to_string(),
            password: Some("hunter22".to_string()),
            frequency: 2437,
            level: -61,
            ..NewWiFiNetwork::with_ssid("Cafe")
        };

        let stored = service(store).add(network).await.unwrap();

        assert_eq!(stored.id, "client-id");
        assert_eq!(stored.capabilities, "[WPA2-PSK-CCMP][ESS]");
        assert_eq!(stored.password.as_deref(), Some("hunter22"));
        assert_eq!(stored.frequency, 2437);
        assert_eq!(stored.level, -61);
    }

    #[tokio::test]
    async fn test_add_empty_ssid_never_persists() {
        let mut store = MockNetworkStore::new();
        store.expect_insert().times(0);

        let result = service(store).add(NewWiFiNetwork::default()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_normalizes_created_at() {
        let cases = [
            ("2024-02-10T09:00:00+01:00", Utc.with_ymd_and_hms(2024, 2, 10, 8, 0, 0)),
            ("2024-02-10T09:00:00", Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0)),
            ("2024-02-10T09:00:00Z", Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0)),
        ];

        for (input, expected) in cases {
            let mut store = MockNetworkStore::new();
            echo_insert(&mut store);

            let network = NewWiFiNetwork {
                created_at: Some(input.parse::<RawTimestamp>().unwrap()),
                ..NewWiFiNetwork::with_ssid("HomeNet")
            };

            let stored = service(store).add(network).await.unwrap();
            assert_eq!(stored.created_at, expected.unwrap(), "input {}", input);
        }
    }

    #[tokio::test]
    async fn test_add_zero_created_at_uses_now() {
        let mut store = MockNetworkStore::new();
        echo_insert(&mut store);

        let network = NewWiFiNetwork {
            created_at: Some("0001-01-01T00:00:00".parse().unwrap()),
            ..NewWiFiNetwork::with_ssid("HomeNet")
        };

        let stored = service(store).add(network).await.unwrap();
        assert!(Utc::now() - stored.created_at < Duration::seconds(5));
    }

    #[tokio::test]
    async fn test_add_propagates_conflict() {
        let mut store = MockNetworkStore::new();
        store
            .expect_insert()
            .times(1)
            .returning(|n: &WiFiNetwork| {
                Err(AppError::Conflict(format!("Network {} already exists", n.id)))
            });

        let network = NewWiFiNetwork {
            id: "dup".to_string(),
            ..NewWiFiNetwork::with_ssid("HomeNet")
        };

        let result = service(store).add(network).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_get_by_id_absent() {
        let mut store = MockNetworkStore::new();
        store
            .expect_find_by_id()
            .withf(|id: &str| id == "missing")
            .returning(|_: &str| Ok(None));

        let result = service(store).get_by_id("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_all_delegates() {
        let now = Utc::now();
        let rows = vec![sample("b", now), sample("a", now - Duration::hours(1))];
        let expected = rows.clone();

        let mut store = MockNetworkStore::new();
        store
            .expect_list_all()
            .times(1)
            .returning(move || Ok(rows.clone()));

        assert_eq!(service(store).get_all().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let mut store = MockNetworkStore::new();
        store.expect_find_by_id().returning(|_: &str| Ok(None));
        store.expect_delete_by_id().times(0);

        assert!(!service(store).delete("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let mut store = MockNetworkStore::new();
        store
            .expect_find_by_id()
            .returning(|id: &str| Ok(Some(sample(id, Utc::now()))));
        store
            .expect_delete_by_id()
            .withf(|id: &str| id == "net-1")
            .times(1)
            .returning(|_: &str| Ok(true));

        assert!(service(store).delete("net-1").await.unwrap());
    }
}
