//! # Error Classifier
//!
//! Pure functions mapping HTTP rejections and transport failures to the
//! [`Outcome`] error variants. The store calls these at the fetch boundary
//! so everything it publishes upward already carries a presentable message.

use crate::error::TransportError;
use crate::outcome::Outcome;

/// Maps a non-2xx HTTP status to an error outcome.
///
/// Known codes get a specific message; anything else gets the generic one.
/// The numeric code is retained in all cases so callers can still branch on
/// it.
pub fn classify_status<T>(status: u16) -> Outcome<T> {
    let message = match status {
        400 => "Bad request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not found",
        408 => "Request timeout",
        500 => "Internal server error",
        502 => "Bad gateway",
        503 => "Service unavailable",
        _ => "Unknown error occurred",
    };
    Outcome::error_with_code(message, status)
}

/// Maps a transport failure to an error outcome.
///
/// The three recognized categories get a message and no code; anything else
/// is passed through as an opaque [`Outcome::Fault`] with the original cause
/// intact.
pub fn classify_transport<T>(err: TransportError) -> Outcome<T> {
    match err {
        TransportError::Connect(_) => Outcome::error("No internet connection"),
        TransportError::Timeout(_) => Outcome::error("Request timeout"),
        TransportError::Io(_) => Outcome::error("Network error occurred"),
        TransportError::Other(cause) => Outcome::Fault(cause),
    }
}
