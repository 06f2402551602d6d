//! # Remote Product API
//!
//! The transport seam between the store and the listing endpoint. The trait
//! returns the raw page reply (status plus optionally-decoded body) so the
//! store owns all classification; implementations only move bytes.

pub mod http;

pub use http::HttpProductApi;

use crate::model::PageResponse;
use async_trait::async_trait;
use feed_core::TransportError;

/// A page reply before classification: the HTTP status and the decoded
/// body, if there was one. A 2xx reply with an empty body is represented as
/// `body: None`, which the store rejects as its own error case.
#[derive(Debug, Clone)]
pub struct PageReply {
    pub status: u16,
    pub body: Option<PageResponse>,
}

impl PageReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam for the product listing.
///
/// The upstream service exposes exactly one remote operation: the
/// paginated listing. There is no single-item endpoint, which is why the
/// store's by-id lookup is cache-only.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Requests one page of the listing. `Err` means the request never
    /// produced a usable status code (connectivity, timeout, i/o, or an
    /// unrecognized failure such as a malformed body).
    async fn fetch_page(&self, page: u32) -> Result<PageReply, TransportError>;
}
