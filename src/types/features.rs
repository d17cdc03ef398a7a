use serde::{Deserialize, Serialize};

/// Feature switches compiled into the firmware, loaded from the device
/// before anything else renders
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Features {
    pub project: bool,
    pub security: bool,
    pub ntp: bool,
    pub ota: bool,
    pub upload_firmware: bool,
}
