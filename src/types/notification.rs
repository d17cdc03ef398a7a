use serde::{Deserialize, Serialize};

/// Snackbar severity, mirrors the UI toolkit's variants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// One user-visible notification queued for the shell to display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}
