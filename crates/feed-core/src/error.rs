//! # Transport Failure Taxonomy
//!
//! This module defines the common transport error categories used throughout
//! the data layer. By centralizing the taxonomy, the HTTP client and the
//! tests share a single definition of what "connectivity failure" or
//! "timeout" means, and the classifier only has to understand one type.

use thiserror::Error;
use tracing::debug;

/// Boxed opaque error used wherever the original cause must survive
/// classification (for upstream inspection and logging).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A failure below the HTTP layer: the request never produced a usable
/// status code. Each variant keeps its source so nothing is lost on the way
/// up.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Name resolution or connection establishment failed.
    #[error("connection failed: {0}")]
    Connect(BoxError),
    /// The request or response timed out.
    #[error("request timed out: {0}")]
    Timeout(BoxError),
    /// The connection was established but reading or writing failed.
    #[error("i/o failure: {0}")]
    Io(BoxError),
    /// Anything the taxonomy does not cover (decode failures, builder
    /// misuse, redirect loops). Surfaces as an opaque fault, never as a
    /// synthesized message.
    #[error("unclassified transport failure: {0}")]
    Other(BoxError),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        debug!(
            error = %err,
            timeout = err.is_timeout(),
            connect = err.is_connect(),
            "Categorizing transport failure"
        );
        // Timeout first: a connect timeout reports both flags.
        if err.is_timeout() {
            TransportError::Timeout(err.into())
        } else if err.is_connect() {
            TransportError::Connect(err.into())
        } else if err.is_request() || err.is_body() {
            TransportError::Io(err.into())
        } else {
            TransportError::Other(err.into())
        }
    }
}
