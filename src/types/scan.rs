use serde::{Deserialize, Serialize};

use crate::types::wifi::WiFiNetworkList;

/// Phase of one scan sequence
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "phase")]
pub enum ScanState {
    #[default]
    Idle,
    /// Waiting for the device to accept the scan request
    Requesting,
    /// Waiting for the network list, `attempt` polls answered `202` so far
    Polling {
        attempt: u8,
    },
    Succeeded,
    Failed,
    /// The poll allowance ran out; the scan itself may still finish on the
    /// device, the client just stopped waiting
    TimedOut,
}

/// One bounded-retry scan sequence.
///
/// `generation` identifies the current sequence: scheduled polls carry the
/// generation they were created under and are discarded on mismatch, so
/// timers outlive neither a restarted scan nor a dismissed view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanSession {
    pub state: ScanState,
    pub generation: u32,
    pub network_list: Option<WiFiNetworkList>,
    pub error_message: Option<String>,
}

impl ScanSession {
    pub fn in_progress(&self) -> bool {
        matches!(self.state, ScanState::Requesting | ScanState::Polling { .. })
    }

    /// Start a fresh sequence, invalidating any timer still pending
    pub fn begin(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = ScanState::Requesting;
        self.network_list = None;
        self.error_message = None;
    }

    /// The owning view is gone; pending timers become no-ops
    pub fn dismiss(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = ScanState::Idle;
        self.network_list = None;
        self.error_message = None;
    }

    pub fn fail(&mut self, message: String) {
        self.state = ScanState::Failed;
        self.network_list = None;
        self.error_message = Some(message);
    }

    pub fn time_out(&mut self, message: String) {
        self.state = ScanState::TimedOut;
        self.network_list = None;
        self.error_message = Some(message);
    }
}
