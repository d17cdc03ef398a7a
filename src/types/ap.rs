use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// When the device brings its own access point up
#[derive(Debug, Clone, Copy, Serialize_repr, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum ApProvisionMode {
    Always = 0,
    WhenWiFiDisconnected = 1,
    Never = 2,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApSettings {
    pub provision_mode: ApProvisionMode,
    pub ssid: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Serialize_repr, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum ApNetworkStatus {
    Active = 0,
    Inactive = 1,
    /// Shutting down once the last station disconnects
    Lingering = 2,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApStatus {
    pub status: ApNetworkStatus,
    pub ip_address: String,
    pub mac_address: String,
    pub station_num: u8,
}
