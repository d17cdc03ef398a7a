use serde::{Deserialize, Serialize};

use crate::http_helpers::{FetchError, ScanPoll};
use crate::types::*;

/// Events that can happen in the app, grouped by domain.
///
/// Variants marked `#[serde(skip)]` are internal continuations (HTTP and
/// effect responses) that never cross the shell boundary.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Event {
    /// Load the feature flags and kick off the first session refresh
    Initialize,

    Session(SessionEvent),
    Features(FeaturesEvent),
    Wifi(WifiEvent),
    Scan(ScanEvent),
    Ap(ApEvent),
    Ntp(NtpEvent),
    Security(SecurityEvent),
    System(SystemEvent),
    Sprinkler(SprinklerEvent),
    Upload(UploadEvent),
    Ui(UiEvent),
}

/// Session lifecycle: sign-in, sign-out, refresh and route guarding
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum SessionEvent {
    /// Re-derive the principal from the stored credential
    Refresh,
    SignInSubmit {
        username: String,
        password: String,
        remember_me: bool,
    },
    SignOut,
    /// A protected view is about to mount at `path`
    GuardProtectedRoute {
        path: String,
    },
    /// A public-only view (sign-in) is about to mount
    GuardPublicRoute,

    // Internal continuations
    #[serde(skip)]
    CredentialLoaded(Option<String>),
    #[serde(skip)]
    VerifyResponse(Result<(), FetchError>),
    #[serde(skip)]
    SignInResponse {
        remember_me: bool,
        result: Result<String, FetchError>,
    },
    #[serde(skip)]
    CredentialPersisted,
    #[serde(skip)]
    CredentialCleared,
}

/// Feature flag loading (runs before authentication)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum FeaturesEvent {
    Load,
    #[serde(skip)]
    Loaded(Result<Features, FetchError>),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum WifiEvent {
    LoadSettings,
    EditSettings(WiFiSettings),
    SettingsFieldChanged {
        name: String,
        value: FieldValue,
    },
    SaveSettings,
    LoadStatus,

    #[serde(skip)]
    SettingsLoaded(Result<WiFiSettings, FetchError>),
    #[serde(skip)]
    SettingsSaved(Result<WiFiSettings, FetchError>),
    #[serde(skip)]
    StatusLoaded(Result<WiFiStatus, FetchError>),
}

/// Network scan: start plus bounded-retry polling
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum ScanEvent {
    Start,
    /// The owning view unmounted; pending polls must become no-ops
    Dismiss,
    /// Timer fire for the poll scheduled by `generation`'s session
    PollTick {
        generation: u32,
    },

    #[serde(skip)]
    StartResponse {
        generation: u32,
        result: Result<(), FetchError>,
    },
    #[serde(skip)]
    PollResponse {
        generation: u32,
        result: Result<ScanPoll, FetchError>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum ApEvent {
    LoadSettings,
    EditSettings(ApSettings),
    SettingsFieldChanged {
        name: String,
        value: FieldValue,
    },
    SaveSettings,
    LoadStatus,

    #[serde(skip)]
    SettingsLoaded(Result<ApSettings, FetchError>),
    #[serde(skip)]
    SettingsSaved(Result<ApSettings, FetchError>),
    #[serde(skip)]
    StatusLoaded(Result<ApStatus, FetchError>),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum NtpEvent {
    LoadSettings,
    EditSettings(NtpSettings),
    SettingsFieldChanged {
        name: String,
        value: FieldValue,
    },
    SaveSettings,
    LoadStatus,
    /// Push the browser's local time to the device (NTP disabled case)
    SetTime {
        local_time: String,
    },

    #[serde(skip)]
    SettingsLoaded(Result<NtpSettings, FetchError>),
    #[serde(skip)]
    SettingsSaved(Result<NtpSettings, FetchError>),
    #[serde(skip)]
    StatusLoaded(Result<NtpStatus, FetchError>),
    #[serde(skip)]
    TimeSet(Result<(), FetchError>),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum SecurityEvent {
    LoadSettings,
    EditSettings(SecuritySettings),
    SettingsFieldChanged {
        name: String,
        value: FieldValue,
    },
    SaveSettings,

    #[serde(skip)]
    SettingsLoaded(Result<SecuritySettings, FetchError>),
    #[serde(skip)]
    SettingsSaved(Result<SecuritySettings, FetchError>),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum SystemEvent {
    LoadStatus,
    LoadOtaSettings,
    EditOtaSettings(OtaSettings),
    OtaSettingsFieldChanged {
        name: String,
        value: FieldValue,
    },
    SaveOtaSettings,
    Restart,
    FactoryReset,

    #[serde(skip)]
    StatusLoaded(Result<SystemStatus, FetchError>),
    #[serde(skip)]
    OtaSettingsLoaded(Result<OtaSettings, FetchError>),
    #[serde(skip)]
    OtaSettingsSaved(Result<OtaSettings, FetchError>),
    #[serde(skip)]
    RestartResponse(Result<(), FetchError>),
    #[serde(skip)]
    FactoryResetResponse(Result<(), FetchError>),
}

/// Sprinkler project: schedule resource plus the live status socket
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum SprinklerEvent {
    LoadSchedule,
    EditSchedule(Schedule),
    ScheduleFieldChanged {
        name: String,
        value: FieldValue,
    },
    SaveSchedule,
    ConnectStatusSocket,
    DisconnectStatusSocket,

    // Pushed by the shell from the status socket
    StatusUpdated(SprinklerStatus),
    SocketConnected,
    SocketDisconnected,

    #[serde(skip)]
    ScheduleLoaded(Result<Schedule, FetchError>),
    #[serde(skip)]
    ScheduleSaved(Result<Schedule, FetchError>),
}

/// Firmware upload progress as reported by the shell transport
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum UploadEvent {
    Started,
    Progress(u8),
    Completed,
    /// The user aborted the transfer - distinct from a failure
    Cancelled,
    Failed(String),
    /// The device rejected the upload credential
    Unauthorized,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum UiEvent {
    DismissNotification { index: usize },
    ClearNotifications,
    RedirectHandled,
}
