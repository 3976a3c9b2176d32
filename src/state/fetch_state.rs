/// Fetch state definitions for tracking a single page analysis
///
/// This module defines every state the fetch pipeline can be in, and which
/// transitions between them are legal.
use std::fmt;

/// Represents the current state of a page fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FetchState {
    // ===== Active States =====
    /// Nothing has been attempted yet
    #[default]
    NotStarted,

    /// The request is being built and sent
    Requesting,

    /// A response arrived; status and status line are known
    Received,

    /// The response body is being read and parsed
    Parsing,

    /// Extractors are running against the parsed document
    Extracting,

    // ===== Terminal Success States =====
    /// All extractors ran and the result is complete
    Done,

    // ===== Terminal Error States =====
    /// Request construction or network failure (timeouts included)
    Failed,

    /// The server answered with a status other than 200
    StatusRejected,

    /// The body could not be read or parsed
    ParseFailed,
}

impl FetchState {
    /// Returns true if this is a terminal state (no further transitions)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Done | Self::Failed | Self::StatusRejected | Self::ParseFailed
        )
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns true if this represents an error state
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed | Self::StatusRejected | Self::ParseFailed)
    }

    /// Returns true if the pipeline may move from `self` to `next`
    pub fn can_transition_to(&self, next: FetchState) -> bool {
        use FetchState::*;

        matches!(
            (self, next),
            (NotStarted, Requesting)
                | (Requesting, Failed)
                | (Requesting, Received)
                | (Received, StatusRejected)
                | (Received, Parsing)
                | (Parsing, ParseFailed)
                | (Parsing, Extracting)
                | (Extracting, Done)
        )
    }

    /// Short lowercase name used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Requesting => "requesting",
            Self::Received => "received",
            Self::Parsing => "parsing",
            Self::Extracting => "extracting",
            Self::Done => "done",
            Self::Failed => "failed",
            Self::StatusRejected => "status_rejected",
            Self::ParseFailed => "parse_failed",
        }
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
