//! Error type shared by every client operation.

/// Failure of a client operation.
///
/// Local validation failures never reach the network. Remote failures keep
/// the HTTP status alongside whatever the server reported.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument violates a documented constraint.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The client could not be configured.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Connection failure or an error while exchanging the request.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller's cancellation token fired before the call completed.
    #[error("request cancelled")]
    Cancelled,

    /// Status >= 400 with a `{code, message}` body.
    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },

    /// Status >= 400 with a body that did not describe the error.
    #[error("HTTP error: {status}")]
    Status { status: u16 },

    /// A successful response whose body did not match the expected shape.
    #[error("decode {what} response: {source}")]
    Decode {
        what: String,
        source: serde_json::Error,
    },

    #[error("encode request body: {0}")]
    Encode(serde_json::Error),
}

impl Error {
    /// HTTP status of a remote failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::Status { status } => Some(*status),
            Error::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Error code reported in the response body, if any.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
