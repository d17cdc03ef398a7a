use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemStatus {
    pub esp_platform: String,
    pub cpu_freq_mhz: u32,
    pub free_heap: u32,
    pub max_alloc_heap: u32,
    pub sketch_size: u32,
    pub free_sketch_space: u32,
    pub sdk_version: String,
    pub flash_chip_size: u32,
    pub flash_chip_speed: u32,
    pub fs_total: u32,
    pub fs_used: u32,
}

/// Over-the-air update daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct OtaSettings {
    pub enabled: bool,
    #[validate(minimum = 1025)]
    pub port: u16,
    #[validate(min_length = 1)]
    pub password: String,
}
