//! # Fetch Outcome
//!
//! This module defines the tri-state wrapper used to propagate fetch results
//! without raising across the data-layer boundary.

use crate::error::BoxError;

/// The settled result of a remote fetch.
///
/// # Contract
/// Any data-layer operation that can fail returns this type rather than
/// raising; callers must match all three variants. The chaining helpers
/// ([`Outcome::on_success`], [`Outcome::on_error`], [`Outcome::on_fault`])
/// invoke a callback only for the matching variant and always hand the
/// original value back, so observation can be composed fluently without
/// altering control flow.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The fetch produced a value.
    Success(T),
    /// The fetch failed in a recognized way. `message` is user-presentable;
    /// `code` is the HTTP status for API rejections and absent for
    /// classified transport failures.
    Error {
        message: String,
        code: Option<u16>,
    },
    /// The fetch failed in a way the classifier does not recognize. The
    /// original cause is kept for upstream inspection and logging; no
    /// message is synthesized here.
    Fault(BoxError),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// A recognized failure without an HTTP status (transport-level).
    pub fn error(message: impl Into<String>) -> Self {
        Outcome::Error {
            message: message.into(),
            code: None,
        }
    }

    /// A recognized failure carrying the HTTP status that produced it.
    pub fn error_with_code(message: impl Into<String>, code: u16) -> Self {
        Outcome::Error {
            message: message.into(),
            code: Some(code),
        }
    }

    /// An unrecognized failure, preserved opaquely.
    pub fn fault(cause: impl Into<BoxError>) -> Self {
        Outcome::Fault(cause.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Runs `action` if this is a `Success`, then returns `self`.
    pub fn on_success(self, action: impl FnOnce(&T)) -> Self {
        if let Outcome::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` with the message and optional code if this is an
    /// `Error`, then returns `self`.
    pub fn on_error(self, action: impl FnOnce(&str, Option<u16>)) -> Self {
        if let Outcome::Error { message, code } = &self {
            action(message, *code);
        }
        self
    }

    /// Runs `action` with the preserved cause if this is a `Fault`, then
    /// returns `self`.
    pub fn on_fault(self, action: impl FnOnce(&BoxError)) -> Self {
        if let Outcome::Fault(cause) = &self {
            action(cause);
        }
        self
    }
}
