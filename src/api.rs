//! REST endpoints and client-side constants for the sprinkler controller.
//!
//! Every settings/status resource follows the same contract: `GET -> 200`
//! with the JSON representation, `POST -> 200` with the representation the
//! device actually persisted.

pub const PROJECT_NAME: &str = "Sprinkler Controller";

pub const FEATURES_ENDPOINT: &str = "/rest/features";

pub const SIGN_IN_ENDPOINT: &str = "/rest/signIn";
pub const VERIFY_AUTHORIZATION_ENDPOINT: &str = "/rest/verifyAuthorization";

pub const WIFI_SETTINGS_ENDPOINT: &str = "/rest/wifiSettings";
pub const WIFI_STATUS_ENDPOINT: &str = "/rest/wifiStatus";

/// `GET -> 202` kicks off a scan, results are collected from [`LIST_NETWORKS_ENDPOINT`]
pub const SCAN_NETWORKS_ENDPOINT: &str = "/rest/scanNetworks";
/// `GET -> 202` while the radio is still scanning, `200` with the network list once done
pub const LIST_NETWORKS_ENDPOINT: &str = "/rest/listNetworks";

pub const AP_SETTINGS_ENDPOINT: &str = "/rest/apSettings";
pub const AP_STATUS_ENDPOINT: &str = "/rest/apStatus";

pub const NTP_SETTINGS_ENDPOINT: &str = "/rest/ntpSettings";
pub const NTP_STATUS_ENDPOINT: &str = "/rest/ntpStatus";
pub const TIME_ENDPOINT: &str = "/rest/time";

pub const OTA_SETTINGS_ENDPOINT: &str = "/rest/otaSettings";
pub const UPLOAD_FIRMWARE_ENDPOINT: &str = "/rest/uploadFirmware";

pub const SECURITY_SETTINGS_ENDPOINT: &str = "/rest/securitySettings";

pub const SYSTEM_STATUS_ENDPOINT: &str = "/rest/systemStatus";
pub const RESTART_ENDPOINT: &str = "/rest/restart";
pub const FACTORY_RESET_ENDPOINT: &str = "/rest/factoryReset";

pub const SCHEDULE_SETTINGS_ENDPOINT: &str = "/rest/schedule";

/// WebSocket path the device pushes live sprinkler status frames on
pub const SPRINKLER_STATUS_SOCKET_PATH: &str = "/ws/status";

/// Web-storage key holding the bearer credential
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Public landing route, also the sign-in page
pub const SIGN_IN_ROUTE: &str = "/";
/// Fallback destination after sign-in when the project feature is disabled
pub const WIFI_DEFAULT_ROUTE: &str = "/wifi/status";
/// Default destination after sign-in
pub const PROJECT_DEFAULT_ROUTE: &str = "/sprinkler/status";
