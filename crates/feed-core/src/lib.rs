//! # Feed Core
//!
//! This crate provides the foundational building blocks for a paginated
//! remote-feed data layer: a tri-state fetch outcome, an error classifier,
//! and an observable state cell with last-value replay.
//!
//! ## Why a tri-state outcome?
//!
//! A remote fetch can settle three ways, and callers need to treat each one
//! differently:
//!
//! - **Success** – the decoded payload.
//! - **Error** – a failure the classifier recognizes. It carries a
//!   user-presentable message and, for HTTP rejections, the status code.
//! - **Fault** – anything the classifier does not recognize. The original
//!   cause is preserved opaquely so upstream layers can log or inspect it,
//!   but no message is synthesized for it.
//!
//! Operations that can fail return [`Outcome`] instead of `Result` so the
//! failure taxonomy never has to cross the fetch boundary as a panic or an
//! error type the UI layer would have to interpret. Exhaustive matching at
//! every call site is part of the contract.
//!
//! ```rust
//! use feed_core::Outcome;
//!
//! let fetched: Outcome<u32> = Outcome::success(7);
//! fetched
//!     .on_success(|value| assert_eq!(*value, 7))
//!     .on_error(|_, _| panic!("not an error"))
//!     .on_fault(|_| panic!("not a fault"));
//! ```
//!
//! ## Classification
//!
//! [`classify::classify_status`] maps HTTP rejection codes to messages and
//! [`classify::classify_transport`] maps [`error::TransportError`] categories
//! (connectivity, timeout, generic I/O) to messages; unrecognized transport
//! failures become [`Outcome::Fault`]. The store layer calls both so that
//! everything it hands upward is already classified.
//!
//! ## Observable state
//!
//! [`state::StateCell`] wraps a tokio `watch` channel: every observer sees
//! the latest value immediately on subscription (last-value-wins replay) and
//! can await subsequent transitions. This is the publication mechanism for
//! UI state, accumulated lists, and bookkeeping flags.

pub mod classify;
pub mod error;
pub mod outcome;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use classify::{classify_status, classify_transport};
pub use error::{BoxError, TransportError};
pub use outcome::Outcome;
pub use state::StateCell;
