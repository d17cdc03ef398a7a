use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// WiFi station configuration. The static IP fields are only present when
/// `static_ip_config` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WiFiSettings {
    pub ssid: String,
    pub password: String,
    pub hostname: String,
    pub static_ip_config: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_mask: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_ip_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_ip_2: Option<String>,
}

/// Station connection states as numbered by the SDK
#[derive(Debug, Clone, Copy, Serialize_repr, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum WiFiConnectionStatus {
    Idle = 0,
    NoSsidAvailable = 1,
    ScanCompleted = 2,
    Connected = 3,
    ConnectFailed = 4,
    ConnectionLost = 5,
    Disconnected = 6,
}

/// Current station state; the address fields are only meaningful while
/// connected
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WiFiStatus {
    pub status: WiFiConnectionStatus,
    pub ssid: Option<String>,
    pub bssid: Option<String>,
    pub channel: Option<u8>,
    pub rssi: Option<i32>,
    pub local_ip: Option<String>,
    pub mac_address: Option<String>,
    pub subnet_mask: Option<String>,
    pub gateway_ip: Option<String>,
    pub dns_ip_1: Option<String>,
    pub dns_ip_2: Option<String>,
}

/// One access point discovered by a scan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WiFiNetwork {
    pub rssi: i32,
    pub ssid: String,
    pub bssid: String,
    pub channel: u8,
    pub encryption_type: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WiFiNetworkList {
    pub networks: Vec<WiFiNetwork>,
}

impl WiFiNetworkList {
    /// Strongest signal first
    pub fn sort_by_signal_strength(&mut self) {
        self.networks.sort_by(|a, b| b.rssi.cmp(&a.rssi));
    }
}
