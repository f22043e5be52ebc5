use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::normalize::RawTimestamp;

pub const DEFAULT_CAPABILITIES: &str = "Unknown";

/// A stored WiFi network row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WiFiNetwork {
    pub id: String,
    pub ssid: String,
    pub bssid: Option<String>,
    pub password: Option<String>,
    pub capabilities: String,
    pub notes: String,
    pub frequency: i32,
    pub level: i32,
    pub is_connected: bool,
    pub ip_address: Option<String>,
    pub ipv6_address: Option<String>,
    pub subnet: Option<String>,
    pub gateway: Option<String>,
    pub broadcast: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a network. Every field may be omitted or
/// `null`; the service fills in or rejects what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewWiFiNetwork {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ssid: String,
    pub bssid: Option<String>,
    pub password: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub capabilities: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub frequency: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub level: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub is_connected: bool,
    pub ip_address: Option<String>,
    pub ipv6_address: Option<String>,
    pub subnet: Option<String>,
    pub gateway: Option<String>,
    pub broadcast: Option<String>,
    pub created_at: Option<RawTimestamp>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewWiFiNetwork {
    pub fn with_ssid(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            ..Default::default()
        }
    }

    /// Build the row to persist. `id`, `capabilities` and `created_at` are
    /// resolved by the caller.
    pub fn into_record(
        self,
        id: String,
        capabilities: String,
        created_at: DateTime<Utc>,
    ) -> WiFiNetwork {
        WiFiNetwork {
            id,
            ssid: self.ssid,
            bssid: self.bssid,
            password: self.password,
            capabilities,
            notes: self.notes,
            frequency: self.frequency,
            level: self.level,
            is_connected: self.is_connected,
            ip_address: self.ip_address,
            ipv6_address: self.ipv6_address,
            subnet: self.subnet,
            gateway: self.gateway,
            broadcast: self.broadcast,
            created_at,
        }
    }
}
