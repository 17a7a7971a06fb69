// src/core/endpoint.rs

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: f64 = 5.0;

/// Known DevSecTools API deployments.
///
/// Any other base URL can still be passed as a plain string; these are just
/// the ones that ship with the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum Endpoint {
    #[strum(to_string = "https://api.devsec.tools")]
    Production,
    #[strum(to_string = "http://api.devsec.local")]
    LocalDev,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Production => "https://api.devsec.tools",
            Endpoint::LocalDev => "http://api.devsec.local",
        }
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.as_str().to_string()
    }
}

/// The three scan operations exposed by the API.
///
/// The lowercase name doubles as the URL path segment and as the `method`
/// key of a batch request.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RequestKind {
    Domain,
    Http,
    Tls,
}

impl RequestKind {
    /// Path of the endpoint relative to the base URL, e.g. `/tls`.
    pub fn path(&self) -> String {
        format!("/{}", self.as_ref())
    }
}
