use serde::{Deserialize, Serialize};

/// Firmware upload progress. The byte transfer itself lives in the shell
/// (it needs a cancelable browser upload); the core only tracks where it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "phase")]
pub enum UploadState {
    #[default]
    Idle,
    Uploading {
        progress: u8,
    },
    Completed,
    Failed {
        message: String,
    },
}
