// src/lib.rs

//! Client SDK for the DevSecTools security-scanning API.
//!
//! ```no_run
//! use devsectools_sdk::{BatchRequest, Client, RequestKind};
//!
//! # async fn run() -> Result<(), devsectools_sdk::ClientError> {
//! let client = Client::new()?;
//! let tls = client.tls("example.com").await?;
//! println!("{:?}", tls.tls_versions.supported_versions());
//!
//! let results = client
//!     .batch(&[
//!         BatchRequest::new(RequestKind::Domain, "example.com"),
//!         BatchRequest::new(RequestKind::Http, "example.com"),
//!     ])
//!     .await;
//! assert_eq!(results.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod logging;

pub use crate::core::client::{ApiFuture, Client, ClientConfig};
pub use crate::core::endpoint::{Endpoint, RequestKind, DEFAULT_TIMEOUT_SECONDS};
pub use crate::core::error::ClientError;
pub use crate::core::models::{
    BatchRequest, BatchResult, CipherSuite, DomainResult, ErrorPayload, HttpSupportResult,
    ScanResponse, TlsConnection, TlsScanResult, TlsVersions,
};
