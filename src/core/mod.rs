// src/core/mod.rs

// Root of the SDK's core: presets, response models, the error taxonomy,
// the shared request path and the client built on top of it.

/// Preset base URLs and the `RequestKind` tag naming each API operation.
pub mod endpoint;

/// Response records returned by the API and the batch request/result types.
pub mod models;

/// The `ClientError` enum shared by every operation.
pub mod error;

/// Timeout-bounded GET with status handling and JSON decoding.
pub mod fetch;

/// The `Client` itself: configuration, the three scan methods and `batch`.
pub mod client;
