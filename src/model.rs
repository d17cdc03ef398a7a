use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state.
/// Also serves as the ViewModel when serialized (the raw credential is excluded).
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Session state
    /// Bearer credential attached to protected requests. Mirrored to web
    /// storage through the Storage effect; never part of the view model.
    #[serde(skip)]
    pub credential: Option<String>,
    pub session: SessionState,
    pub sign_in_pending: bool,
    /// Destination recorded when an unauthenticated navigation was rejected,
    /// consumed by the public-route guard after sign-in
    pub login_redirect: Option<String>,

    // Feature flags (loaded before anything else renders)
    pub features: Option<Features>,

    // Device resources
    pub wifi_settings: ResourceState<WiFiSettings>,
    pub wifi_status: ResourceState<WiFiStatus>,
    pub ap_settings: ResourceState<ApSettings>,
    pub ap_status: ResourceState<ApStatus>,
    pub ntp_settings: ResourceState<NtpSettings>,
    pub ntp_status: ResourceState<NtpStatus>,
    pub ota_settings: ResourceState<OtaSettings>,
    pub security_settings: ResourceState<SecuritySettings>,
    pub system_status: ResourceState<SystemStatus>,

    // Sprinkler project state
    pub schedule: ResourceState<Schedule>,
    /// Live status pushed by the device over the status socket
    pub sprinkler_status: Option<SprinklerStatus>,
    pub status_socket_connected: bool,

    // Network scan state
    pub scan: ScanSession,

    // Firmware upload state
    pub upload_state: UploadState,

    // UI state
    pub notifications: Vec<Notification>,
    /// Route the shell must navigate to, acknowledged with `UiEvent::RedirectHandled`
    pub redirect_to: Option<String>,
}

impl Model {
    /// The authenticated identity, if any
    pub fn principal(&self) -> Option<&Principal> {
        self.session.principal()
    }

    /// Whether the firmware was built with the security manager.
    /// Until the feature flags are loaded the device is assumed secured.
    pub fn security_enabled(&self) -> bool {
        self.features.as_ref().map_or(true, |f| f.security)
    }

    /// Drop the credential and mark the session unauthenticated
    pub fn invalidate_session(&mut self) {
        self.credential = None;
        self.session = SessionState::Unauthenticated;
    }

    pub fn push_notification(&mut self, severity: Severity, message: impl Into<String>) {
        self.notifications.push(Notification {
            message: message.into(),
            severity,
        });
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.push_notification(Severity::Success, message);
    }

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.push_notification(Severity::Info, message);
    }

    pub fn notify_warning(&mut self, message: impl Into<String>) {
        self.push_notification(Severity::Warning, message);
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.push_notification(Severity::Error, message);
    }

    /// Emit an error notification and return a render command
    pub fn error_and_render(
        &mut self,
        message: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.notify_error(message);
        crux_core::render::render()
    }
}
