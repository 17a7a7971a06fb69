// src/core/client.rs

use std::time::Duration;

use futures::future::{join_all, BoxFuture, FutureExt, TryFutureExt};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::core::endpoint::{Endpoint, RequestKind, DEFAULT_TIMEOUT_SECONDS};
use crate::core::error::ClientError;
use crate::core::fetch::fetch_json;
use crate::core::models::{
    BatchRequest, BatchResult, DomainResult, HttpSupportResult, ScanResponse, TlsScanResult,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Future returned by every client method. It owns a snapshot of the client
/// configuration taken when the method was called.
pub type ApiFuture<T> = BoxFuture<'static, Result<T, ClientError>>;

/// Options accepted when constructing a [`Client`]. Unset fields fall back to
/// the production endpoint and a 5 second timeout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<f64>,
}

impl ClientConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: f64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

/// Client for the DevSecTools scanning API.
///
/// Cloning is cheap and the clone gets its own configuration; the underlying
/// HTTP client is shared.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Client {
    /// Client against the production endpoint with default settings.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self::with_http_client(config, http))
    }

    /// Uses a caller-provided reqwest client, e.g. one with custom proxy or
    /// TLS settings. Any timeout configured on it applies in addition to the
    /// SDK timeout.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        let base_url = config
            .base_url
            .unwrap_or_else(|| Endpoint::Production.into());
        let timeout = timeout_from_seconds(config.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS));
        debug!(base_url = %base_url, timeout_ms = %timeout.as_millis(), "Client configured.");
        Self { http, base_url, timeout }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Configured timeout in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Replaces the base URL. Requests already started keep the old one.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
        debug!(base_url = %self.base_url, "Base URL updated.");
    }

    /// Replaces the timeout. Requests already started keep the old one.
    ///
    /// Zero, negative and NaN values make every request time out at once.
    pub fn set_timeout_seconds(&mut self, seconds: f64) {
        self.timeout = timeout_from_seconds(seconds);
        debug!(timeout_ms = %self.timeout.as_millis(), "Timeout updated.");
    }

    /// Full URL requested for `kind` against `target`:
    /// `{base_url}/{kind}?url={percent-encoded target}`.
    pub fn request_url(&self, kind: RequestKind, target: &str) -> String {
        format!(
            "{}{}?url={}",
            self.base_url,
            kind.path(),
            urlencoding::encode(target)
        )
    }

    /// Looks up the hostname the API resolves for `url`.
    pub fn domain(&self, url: &str) -> ApiFuture<DomainResult> {
        self.scan(RequestKind::Domain, url)
    }

    /// Checks which HTTP versions (1.1, 2, 3) the target supports.
    pub fn http(&self, url: &str) -> ApiFuture<HttpSupportResult> {
        self.scan(RequestKind::Http, url)
    }

    /// Scans the target's TLS versions and cipher suites.
    pub fn tls(&self, url: &str) -> ApiFuture<TlsScanResult> {
        self.scan(RequestKind::Tls, url)
    }

    /// Runs every request concurrently and reports each outcome in input
    /// order. A failed request becomes `Err("Error: {message}")` at its
    /// index; the batch itself never fails.
    pub fn batch(&self, requests: &[BatchRequest]) -> BoxFuture<'static, Vec<BatchResult>> {
        let pending: Vec<ApiFuture<ScanResponse>> = requests
            .iter()
            .map(|request| handler(request.method)(self, &request.url))
            .collect();
        info!(requests = pending.len(), "Dispatching batch.");

        async move {
            let results: Vec<BatchResult> = join_all(pending)
                .await
                .into_iter()
                .map(|result| result.map_err(|e| format!("Error: {}", e)))
                .collect();
            let failed = results.iter().filter(|result| result.is_err()).count();
            info!(total = results.len(), failed, "Batch finished.");
            results
        }
        .boxed()
    }

    fn scan<T>(&self, kind: RequestKind, target: &str) -> ApiFuture<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let request_url = self.request_url(kind, target);
        let http = self.http.clone();
        let timeout = self.timeout;

        async move {
            let url = Url::parse(&request_url).map_err(|source| ClientError::InvalidUrl {
                url: request_url.clone(),
                source,
            })?;
            fetch_json(&http, url, timeout).await
        }
        .boxed()
    }
}

type Dispatch = fn(&Client, &str) -> ApiFuture<ScanResponse>;

fn handler(kind: RequestKind) -> Dispatch {
    match kind {
        RequestKind::Domain => dispatch_domain,
        RequestKind::Http => dispatch_http,
        RequestKind::Tls => dispatch_tls,
    }
}

fn dispatch_domain(client: &Client, url: &str) -> ApiFuture<ScanResponse> {
    client.domain(url).map_ok(ScanResponse::Domain).boxed()
}

fn dispatch_http(client: &Client, url: &str) -> ApiFuture<ScanResponse> {
    client.http(url).map_ok(ScanResponse::Http).boxed()
}

fn dispatch_tls(client: &Client, url: &str) -> ApiFuture<ScanResponse> {
    client.tls(url).map_ok(ScanResponse::Tls).boxed()
}

fn timeout_from_seconds(seconds: f64) -> Duration {
    if seconds.is_nan() || seconds <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_and_five_seconds() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url(), Endpoint::Production.as_str());
        assert_eq!(client.timeout_ms(), 5000);
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn config_overrides_defaults() {
        let config = ClientConfig::default()
            .with_base_url(Endpoint::LocalDev)
            .with_timeout_seconds(1.5);
        let client = Client::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://api.devsec.local");
        assert_eq!(client.timeout_ms(), 1500);
    }

    #[test]
    fn setters_replace_values_without_validation() {
        let mut client = Client::new().unwrap();
        client.set_base_url("not a url");
        assert_eq!(client.base_url(), "not a url");
        client.set_timeout_seconds(12.0);
        assert_eq!(client.timeout_ms(), 12_000);
    }

    #[test]
    fn non_positive_timeouts_become_zero() {
        assert_eq!(timeout_from_seconds(0.0), Duration::ZERO);
        assert_eq!(timeout_from_seconds(-3.0), Duration::ZERO);
        assert_eq!(timeout_from_seconds(f64::NAN), Duration::ZERO);
        assert_eq!(timeout_from_seconds(f64::INFINITY), Duration::MAX);
        assert_eq!(timeout_from_seconds(0.25), Duration::from_millis(250));
    }

    #[test]
    fn request_url_percent_encodes_target() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080");
        let client = Client::with_config(config).unwrap();
        assert_eq!(
            client.request_url(RequestKind::Domain, "https://a.com/x?y=1&z=2#frag b"),
            "http://localhost:8080/domain?url=https%3A%2F%2Fa.com%2Fx%3Fy%3D1%26z%3D2%23frag%20b"
        );
        assert_eq!(
            client.request_url(RequestKind::Tls, "example.com"),
            "http://localhost:8080/tls?url=example.com"
        );
    }

    #[tokio::test]
    async fn unparseable_base_url_fails_the_request() {
        let config = ClientConfig::default().with_base_url("not a url");
        let client = Client::with_config(config).unwrap();
        let err = client.domain("a.com").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn empty_batch_yields_empty_results() {
        let client = Client::new().unwrap();
        assert!(client.batch(&[]).await.is_empty());
    }
}
