// src/checker/http.rs
// =============================================================================
// This module checks whether a single link is alive.
//
// Key functionality:
// - Makes exactly one HTTP HEAD request per link (no body download, no retry)
// - Classifies the outcome: only 200 counts as valid
// - Turns every transport failure into data instead of an error
//
// A failure (timeout, DNS, refused connection, TLS, malformed url) has no real
// HTTP status, so it is reported with the sentinel 400 Bad Request.
// =============================================================================

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CheckerConfig;
use crate::error::Result;

/// Status reported when no HTTP status was received at all (400 Bad Request).
pub const SENTINEL_STATUS: u16 = 400;

// The outcome of checking one link
//
// Created once by verify_link (or by the pool when a worker died) and never
// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkCheckResult {
    /// The link exactly as it was extracted
    pub link: String,
    /// True iff status_code is 200
    pub is_valid: bool,
    /// Observed HTTP status, or SENTINEL_STATUS on transport failure
    pub status_code: u16,
    /// Optional detail, e.g. "HTTP 404" or "Request timed out"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LinkCheckResult {
    /// Result for a link that produced an HTTP response.
    pub fn from_status(link: String, status: StatusCode) -> Self {
        Self {
            link,
            is_valid: status == StatusCode::OK,
            status_code: status.as_u16(),
            message: Some(format!("HTTP {}", status.as_u16())),
        }
    }

    /// Result for a link that never produced an HTTP response.
    pub fn failure(link: String, message: impl Into<String>) -> Self {
        Self {
            link,
            is_valid: false,
            status_code: SENTINEL_STATUS,
            message: Some(message.into()),
        }
    }
}

// Builds the one client shared by every worker
//
// Client is cheap to clone (it's an Arc internally), so the pool clones it
// into each worker and all of them share the same connection pool.
// Redirects follow reqwest's default policy.
pub fn build_client(config: &CheckerConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

// Checks a single link with one HEAD request
//
// This never fails: whatever goes wrong becomes part of the returned result.
pub async fn verify_link(client: &Client, link: String) -> LinkCheckResult {
    match client.head(link.as_str()).send().await {
        Ok(response) => {
            let result = LinkCheckResult::from_status(link, response.status());
            if result.is_valid {
                debug!(link = %result.link, status = result.status_code, "link ok");
            } else {
                warn!(link = %result.link, status = result.status_code, "link returned non-200 status");
            }
            result
        }
        Err(e) => {
            let reason = describe_error(&e);
            warn!(link = %link, error = %e, "{}", reason);
            LinkCheckResult::failure(link, reason)
        }
    }
}

// Puts a reqwest error into a human-readable category
//
// The category only feeds the message; every branch is classified the same
// way (invalid, sentinel status).
fn describe_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string().to_lowercase();

    if error.is_builder() {
        "Malformed URL".to_string()
    } else if error.is_timeout() {
        "Request timed out".to_string()
    } else if error.is_redirect() {
        "Too many redirects".to_string()
    } else if error.is_connect() {
        if error_string.contains("dns") {
            "Could not resolve hostname".to_string()
        } else {
            "Connection failed".to_string()
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") || error_string.contains("tls") {
        "SSL certificate error".to_string()
    } else {
        error.to_string()
    }
}
