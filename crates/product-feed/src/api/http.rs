//! # HTTP Listing Client
//!
//! `ProductApi` implementation backed by a shared `reqwest` client.

use super::{PageReply, ProductApi};
use crate::config::FeedConfig;
use crate::model::PageResponse;
use async_trait::async_trait;
use feed_core::TransportError;
use tracing::{debug, instrument};

/// Talks to `GET {base_url}/products?page=&limit=&category=`.
///
/// Non-2xx replies are returned with `body: None`; the error body the
/// service may attach is not parsed, since classification happens purely
/// from the status code.
pub struct HttpProductApi {
    client: reqwest::Client,
    config: FeedConfig,
}

impl HttpProductApi {
    pub fn new(config: FeedConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    #[instrument(skip(self))]
    async fn fetch_page(&self, page: u32) -> Result<PageReply, TransportError> {
        let url = format!("{}/products", self.config.base_url);
        debug!(%url, page, limit = self.config.page_size, "Requesting listing page");

        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("limit", self.config.page_size)])
            .query(&[("category", self.config.category.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(PageReply {
                status: status.as_u16(),
                body: None,
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(PageReply {
                status: status.as_u16(),
                body: None,
            });
        }

        let body = serde_json::from_str::<PageResponse>(&text)
            .map_err(|err| TransportError::Other(Box::new(err)))?;
        Ok(PageReply {
            status: status.as_u16(),
            body: Some(body),
        })
    }
}
