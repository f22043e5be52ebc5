pub mod network;

pub use network::{NewWiFiNetwork, WiFiNetwork, DEFAULT_CAPABILITIES};
