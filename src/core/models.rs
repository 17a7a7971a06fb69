// src/core/models.rs

use serde::{Deserialize, Serialize};

use crate::core::endpoint::RequestKind;

// --- Response Models ---

/// Response of the `/domain` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainResult {
    pub hostname: String,
}

/// Response of the `/http` endpoint: which HTTP versions the host speaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSupportResult {
    pub hostname: String,
    pub http11: bool,
    pub http2: bool,
    pub http3: bool,
}

impl HttpSupportResult {
    /// Labels of the supported HTTP versions, oldest first.
    pub fn supported_versions(&self) -> Vec<&'static str> {
        [
            (self.http11, "HTTP/1.1"),
            (self.http2, "HTTP/2"),
            (self.http3, "HTTP/3"),
        ]
        .into_iter()
        .filter_map(|(supported, label)| supported.then_some(label))
        .collect()
    }
}

/// Response of the `/tls` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsScanResult {
    pub hostname: String,
    pub tls_connections: Vec<TlsConnection>,
    pub tls_versions: TlsVersions,
}

/// Which TLS protocol versions the host accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsVersions {
    pub tls10: bool,
    pub tls11: bool,
    pub tls12: bool,
    pub tls13: bool,
}

impl TlsVersions {
    /// Labels of the supported TLS versions, oldest first.
    pub fn supported_versions(&self) -> Vec<&'static str> {
        [
            (self.tls10, "TLS 1.0"),
            (self.tls11, "TLS 1.1"),
            (self.tls12, "TLS 1.2"),
            (self.tls13, "TLS 1.3"),
        ]
        .into_iter()
        .filter_map(|(supported, label)| supported.then_some(label))
        .collect()
    }
}

/// A successful handshake at one protocol version and the suites it offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsConnection {
    pub version: String,
    pub version_id: u32,
    pub cipher_suites: Vec<CipherSuite>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CipherSuite {
    pub authentication: String,
    pub encryption: String,
    pub gnutls_name: String,
    pub hash: String,
    pub iana_name: String,
    #[serde(rename = "isAEAD")]
    pub is_aead: bool,
    #[serde(rename = "isPFS")]
    pub is_pfs: bool,
    pub key_exchange: String,
    pub openssl_name: String,
    pub strength: String,
    pub url: String,
}

/// Body returned by the API alongside a non-success status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
}

// --- Batch Models ---

/// Any of the three scan responses, as produced by a batch.
///
/// Serialized untagged so a batch result looks like the raw API bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanResponse {
    Tls(TlsScanResult),
    Http(HttpSupportResult),
    Domain(DomainResult),
}

impl ScanResponse {
    pub fn kind(&self) -> RequestKind {
        match self {
            ScanResponse::Domain(_) => RequestKind::Domain,
            ScanResponse::Http(_) => RequestKind::Http,
            ScanResponse::Tls(_) => RequestKind::Tls,
        }
    }

    pub fn hostname(&self) -> &str {
        match self {
            ScanResponse::Domain(result) => &result.hostname,
            ScanResponse::Http(result) => &result.hostname,
            ScanResponse::Tls(result) => &result.hostname,
        }
    }
}

/// One entry of a batch: which operation to run against which target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub method: RequestKind,
    pub url: String,
}

impl BatchRequest {
    pub fn new(method: RequestKind, url: impl Into<String>) -> Self {
        Self { method, url: url.into() }
    }
}

/// Outcome of one batch entry. The error side is the failure message
/// prefixed with `"Error: "`.
pub type BatchResult = Result<ScanResponse, String>;
