// src/core/error.rs

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong with a single API call.
///
/// The `Display` output is the human-readable failure message; batch results
/// carry it verbatim after an `"Error: "` prefix.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, DNS, TLS or body-read failure reported by the transport.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Non-success status with an `error` message in the body.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Non-success status without a usable message.
    #[error("HTTP Error {}", .0.as_u16())]
    Status(StatusCode),

    /// A success response whose body did not match the expected shape.
    #[error("invalid JSON response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Base URL and target did not combine into a parseable URL.
    #[error("invalid request URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout(_))
    }

    /// HTTP status of the response, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } | ClientError::Status(status) => Some(*status),
            ClientError::Transport(err) => err.status(),
            _ => None,
        }
    }
}
