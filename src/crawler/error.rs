//! Fetch failure types
//!
//! A failed fetch never aborts the caller. The error is rendered into the
//! result's `error_message` and its kind is kept alongside it.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Why a fetch did not produce a complete result
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to create request: {0}")]
    RequestConstruction(String),

    #[error("Network error: request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Network error: {0}")]
    Network(String),

    #[error("{}", status_description(*status))]
    NonSuccessStatus { status: u16 },

    #[error("Failed to parse HTML: {0}")]
    Parse(String),
}

impl FetchError {
    /// The failure category this error belongs to
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::RequestConstruction(_) => FailureKind::RequestConstruction,
            Self::Timeout(_) | Self::Network(_) => FailureKind::Network,
            Self::NonSuccessStatus { .. } => FailureKind::NonSuccessStatus,
            Self::Parse(_) => FailureKind::Parse,
        }
    }
}

/// Failure category recorded on an unsuccessful result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The client or request could not be built (bad URL, bad header)
    RequestConstruction,
    /// The request was sent but no response arrived (includes timeouts)
    Network,
    /// The server answered with something other than 200
    NonSuccessStatus,
    /// The response body could not be read or parsed
    Parse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestConstruction => "request_construction",
            Self::Network => "network",
            Self::NonSuccessStatus => "non_success_status",
            Self::Parse => "parse",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Describes a non-200 HTTP status for the user
///
/// | Status | Description |
/// |--------|-------------|
/// | 400, 401, 403, 404, 500 | specific message |
/// | other 4xx | client error |
/// | other 5xx | server error |
/// | anything else | unexpected |
pub fn status_description(status_code: u16) -> &'static str {
    match status_code {
        400 => "Bad Request - The server cannot process the request",
        401 => "Unauthorized - Authentication is required",
        403 => "Forbidden - Access to this resource is denied",
        404 => "Not Found - The requested page does not exist",
        500 => "Internal Server Error - The server encountered an error",
        400..=499 => "Client Error - There's an issue with the request",
        500..=599 => "Server Error - The server encountered an error",
        _ => "Unexpected status code",
    }
}
