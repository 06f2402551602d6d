//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by binaries built on the
//! feed data layer.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`). Log levels are controlled via `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full request/reply detail
//! ```
//!
//! ## What Gets Traced
//!
//! - **Store operations**: page fetches with status, item counts, and cache
//!   size as structured fields
//! - **Controller transitions**: published state changes and suppressed
//!   pagination failures
//! - **Transport classification**: which category a low-level failure
//!   landed in, with the original error attached

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - structured fields carry the context
        .compact()
        .init();
}
