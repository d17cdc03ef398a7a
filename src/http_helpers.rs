//! HTTP response processing for the core.
//!
//! The device API has exactly three status codes with contractual meaning:
//! `200` (success, body per resource), `202` (operation accepted but not
//! finished, scan workflow only) and `401` (session no longer accepted).
//! Everything else is an undifferentiated failure surfaced to the user.

use crux_http::Response;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{SignInResponse, WiFiNetworkList};

/// Base URL prefix for device API endpoints.
///
/// `crux_http` rejects relative URLs (`RelativeUrlWithoutBase`), so requests
/// are built against this dummy absolute prefix. The UI shell strips it
/// before issuing the browser `fetch()`, which keeps the actual requests
/// relative to the page origin.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address for a device API endpoint.
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Failure of one request against the device API, classified by the
/// status-code contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FetchError {
    /// `401` - the credential was rejected
    Unauthorized,
    /// A status outside the endpoint's contract
    UnexpectedStatus(u16),
    /// `200` with a body this client cannot decode
    Parse(String),
    /// The request never completed (network unreachable, aborted)
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Unauthorized => write!(f, "Unauthorized"),
            FetchError::UnexpectedStatus(status) => write!(f, "Invalid status code: {status}"),
            FetchError::Parse(message) | FetchError::Transport(message) => write!(f, "{message}"),
        }
    }
}

fn parse_body<T: DeserializeOwned>(response: &mut Response<Vec<u8>>) -> Result<T, FetchError> {
    match response.take_body() {
        Some(body) => serde_json::from_slice(&body)
            .map_err(|e| FetchError::Parse(format!("JSON parse error: {e}"))),
        None => Err(FetchError::Parse("Empty response body".to_string())),
    }
}

/// Process a response carrying a resource representation: `200` with body.
pub fn process_resource_response<T: DeserializeOwned>(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, FetchError> {
    let mut response = result.map_err(|e| FetchError::Transport(e.to_string()))?;
    match u16::from(response.status()) {
        200 => parse_body(&mut response),
        401 => Err(FetchError::Unauthorized),
        status => Err(FetchError::UnexpectedStatus(status)),
    }
}

/// Process a response for an operation acknowledged by status alone.
pub fn process_status_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), FetchError> {
    let response = result.map_err(|e| FetchError::Transport(e.to_string()))?;
    match u16::from(response.status()) {
        200 => Ok(()),
        401 => Err(FetchError::Unauthorized),
        status => Err(FetchError::UnexpectedStatus(status)),
    }
}

/// Process the response to a scan start request: the device answers `202`
/// while it spins the radio up.
pub fn process_scan_start_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), FetchError> {
    let response = result.map_err(|e| FetchError::Transport(e.to_string()))?;
    match u16::from(response.status()) {
        202 => Ok(()),
        401 => Err(FetchError::Unauthorized),
        status => Err(FetchError::UnexpectedStatus(status)),
    }
}

/// One answer from the scan status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScanPoll {
    /// `200` - the network list is complete
    Ready(WiFiNetworkList),
    /// `202` - the device is still scanning
    Pending,
}

/// Process one poll of the scan status endpoint.
pub fn process_scan_poll_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<ScanPoll, FetchError> {
    let mut response = result.map_err(|e| FetchError::Transport(e.to_string()))?;
    match u16::from(response.status()) {
        200 => parse_body(&mut response).map(ScanPoll::Ready),
        202 => Ok(ScanPoll::Pending),
        401 => Err(FetchError::Unauthorized),
        status => Err(FetchError::UnexpectedStatus(status)),
    }
}

/// Process a sign-in response: `200` carries the issued access token,
/// `401` means the credentials were rejected.
pub fn process_sign_in_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<String, FetchError> {
    let mut response = result.map_err(|e| FetchError::Transport(e.to_string()))?;
    match u16::from(response.status()) {
        200 => parse_body::<SignInResponse>(&mut response).map(|body| body.access_token),
        401 => Err(FetchError::Unauthorized),
        status => Err(FetchError::UnexpectedStatus(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_formats_with_literal_code() {
        assert_eq!(
            FetchError::UnexpectedStatus(500).to_string(),
            "Invalid status code: 500"
        );
    }

    #[test]
    fn transport_error_formats_as_its_message() {
        let error = FetchError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "connection refused");
    }

    #[test]
    fn build_url_prefixes_the_endpoint() {
        assert_eq!(
            build_url("/rest/wifiSettings"),
            "https://relative/rest/wifiSettings"
        );
    }
}
