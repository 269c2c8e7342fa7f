//! Error types for the client.

use oparl_model::{Kind, RegistryError};
use thiserror::Error;

/// Result type for fetcher operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Failures reported by a [`Fetcher`](crate::Fetcher).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or HTTP-layer problem, including non-2xx statuses.
    #[error("transport error fetching {url}: {reason}")]
    Transport { url: String, reason: String },

    /// The response body is not valid JSON.
    #[error("invalid JSON from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("http client: {0}")]
    Setup(String),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Fatal errors. Non-fatal deviations are reported as
/// [`Diagnostic`](oparl_model::Diagnostic)s instead.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("JSON data does not have an `id` field")]
    MissingId,

    #[error("JSON data does not have a `type` field")]
    MissingType,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("type from JSON data ({found}) does not match instance type ({expected})")]
    TypeMismatch { expected: Kind, found: Kind },

    #[error("object \"{id}\" has no field \"{field}\"")]
    FieldNotFound { id: String, field: String },

    #[error("invalid index {0}: only non-negative integer indices are supported")]
    InvalidIndex(i64),

    #[error("index {index} is out of range for list {url}")]
    IndexOutOfRange { url: String, index: usize },

    #[error("malformed page {url}: {reason}")]
    MalformedPage { url: String, reason: String },

    #[error("page {page} of list {url} changed between fetches")]
    InconsistentPage { url: String, page: usize },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
