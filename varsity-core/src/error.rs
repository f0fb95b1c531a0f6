use thiserror::Error;

/// Unified error type for the varsity workspace.
///
/// Every variant is a per-source, per-call condition. Chain resolution
/// catches these, logs them, and moves on; exhausting a chain surfaces as
/// an explicit "unavailable" result, never as an error to the caller.
#[derive(Debug, Error)]
pub enum VarsityError {
    /// The requested capability is not implemented by the target source.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability string describing what was requested (e.g. "summary/boxscore").
        capability: &'static str,
    },

    /// Transport-level failure: DNS, connect, body read, client timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a non-2xx status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// An expected key or shape was absent from the payload.
    #[error("schema mismatch: {0}")]
    Schema(String),

    /// Well-formed response carrying zero usable records.
    #[error("{source_name} returned no usable records")]
    Empty {
        /// Source that produced the empty result.
        source_name: String,
    },

    /// An individual source failed with an opaque condition.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Source name that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {capability} via {source_name}")]
    SourceTimeout {
        /// Source name that timed out.
        source_name: String,
        /// Capability label (e.g. "standings", "scoreboard").
        capability: &'static str,
    },

    /// All attempted sources failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<VarsityError>),
}

impl VarsityError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Schema` error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Helper: build an `Empty` error.
    pub fn empty(source_name: impl Into<String>) -> Self {
        Self::Empty {
            source_name: source_name.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(source_name: impl Into<String>, capability: &'static str) -> Self {
        Self::SourceTimeout {
            source_name: source_name.into(),
            capability,
        }
    }
}

impl From<reqwest::Error> for VarsityError {
    fn from(err: reqwest::Error) -> Self {
        match (err.status(), err.url()) {
            (Some(status), Some(url)) => Self::Status {
                status: status.as_u16(),
                url: url.to_string(),
            },
            _ => Self::Network(err.to_string()),
        }
    }
}
