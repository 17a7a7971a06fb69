// src/core/fetch.rs

//! The request path shared by every client method: one GET, bounded by a
//! timeout, with the status and body turned into a typed result.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::core::error::ClientError;
use crate::core::models::ErrorPayload;

/// Races `operation` against a timer.
///
/// If the timer fires first the operation future is dropped, which aborts
/// whatever I/O it had in flight, and the call fails with
/// [`ClientError::Timeout`].
pub async fn with_timeout<F, T>(limit: Duration, operation: F) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, ClientError>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => {
            warn!(timeout_ms = %limit.as_millis(), "Request timed out.");
            Err(ClientError::Timeout(limit))
        }
    }
}

/// Issues a GET to `url` and decodes the JSON body as `T`.
///
/// Sending the request and reading the body both count against `limit`.
pub async fn fetch_json<T>(http: &reqwest::Client, url: Url, limit: Duration) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    with_timeout(limit, async {
        debug!(url = %url, "Sending API request.");
        let response = http.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "API request failed.");
            ClientError::Transport(e)
        })?;

        let status = response.status();
        debug!(url = %url, %status, "Received API response.");
        let body = response.bytes().await.map_err(ClientError::Transport)?;
        decode_response(status, &body)
    })
    .await
}

/// Turns a status and raw body into the caller's expected shape.
pub fn decode_response<T>(status: StatusCode, body: &[u8]) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    if !status.is_success() {
        let err = error_from_body(status, body);
        warn!(%status, error = %err, "API returned an error status.");
        return Err(err);
    }
    serde_json::from_slice(body).map_err(ClientError::Decode)
}

/// Builds the failure for a non-success response.
///
/// Uses the body's `error` message when there is a non-empty one, otherwise
/// falls back to the status code. A body that is not JSON at all counts as
/// having no message.
pub fn error_from_body(status: StatusCode, body: &[u8]) -> ClientError {
    let payload: ErrorPayload = serde_json::from_slice(body).unwrap_or_default();
    match payload.error {
        Some(message) if !message.is_empty() => ClientError::Api { status, message },
        _ => ClientError::Status(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::DomainResult;

    #[test]
    fn error_body_message_is_used_verbatim() {
        let err = error_from_body(StatusCode::BAD_REQUEST, br#"{"error":"bad host"}"#);
        assert_eq!(err.to_string(), "bad host");
    }

    #[test]
    fn missing_or_empty_message_falls_back_to_status() {
        let bodies: [&[u8]; 4] = [b"{}", br#"{"error":""}"#, b"<html>oops</html>", b""];
        for body in bodies {
            let err = error_from_body(StatusCode::INTERNAL_SERVER_ERROR, body);
            assert!(matches!(err, ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
            assert!(err.to_string().contains("500"));
        }
    }

    #[test]
    fn success_body_decodes() {
        let result: DomainResult =
            decode_response(StatusCode::OK, br#"{"hostname":"example.com"}"#).unwrap();
        assert_eq!(result.hostname, "example.com");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let result: Result<DomainResult, _> = decode_response(StatusCode::OK, b"not json");
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn timeout_fires_for_stalled_operation() {
        let result: Result<(), _> = with_timeout(Duration::from_millis(20), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(ClientError::Timeout(d)) if d == Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn operation_errors_pass_through_the_timeout() {
        let result: Result<(), _> = with_timeout(Duration::from_secs(1), async {
            Err(ClientError::Status(StatusCode::NOT_FOUND))
        })
        .await;
        assert!(matches!(result, Err(ClientError::Status(StatusCode::NOT_FOUND))));
    }
}
