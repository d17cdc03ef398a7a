use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NtpSettings {
    pub enabled: bool,
    pub server: String,
    /// Human-readable zone name, e.g. "Europe/London"
    pub tz_label: String,
    /// POSIX TZ string the firmware actually applies
    pub tz_format: String,
}

#[derive(Debug, Clone, Copy, Serialize_repr, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum NtpSyncStatus {
    Inactive = 0,
    Active = 1,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NtpStatus {
    pub status: NtpSyncStatus,
    pub utc_time: String,
    pub local_time: String,
    pub server: String,
    pub uptime: u64,
}

/// Manual time set, used while NTP is disabled
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSetRequest {
    pub local_time: String,
}
