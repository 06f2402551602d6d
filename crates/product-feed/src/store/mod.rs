//! # Product Store
//!
//! The caching repository: owns the network call via the [`ProductApi`]
//! seam and an in-memory cache keyed by product id. Everything it returns
//! is already classified into an [`Outcome`].

use crate::api::ProductApi;
use crate::model::{PageResponse, Product};
use async_trait::async_trait;
use feed_core::{classify_status, classify_transport, Outcome};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Data-source seam for the list controller.
///
/// Splitting this from [`ProductStore`] lets controller tests stub the
/// repository directly, without going through reply classification.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetches one page of the listing, caching every product it contains.
    async fn fetch_page(&self, page: u32) -> Outcome<PageResponse>;

    /// Looks up a previously fetched product. Cache only: the upstream
    /// service has no single-item endpoint, so products never observed via
    /// [`ProductRepository::fetch_page`] are unreachable.
    async fn product_by_id(&self, id: i64) -> Outcome<Product>;
}

/// The caching product store.
///
/// The cache maps product id to the last-seen product (last write wins per
/// id), is filled only by `fetch_page`, is never evicted, and lives exactly
/// as long as the store. It is not persisted across restarts.
pub struct ProductStore<A> {
    api: A,
    cache: Mutex<HashMap<i64, Product>>,
}

impl<A: ProductApi> ProductStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<A: ProductApi> ProductRepository for ProductStore<A> {
    #[instrument(skip(self))]
    async fn fetch_page(&self, page: u32) -> Outcome<PageResponse> {
        debug!(page, "Fetching listing page");

        match self.api.fetch_page(page).await {
            Ok(reply) if reply.is_success() => match reply.body {
                Some(fetched) => {
                    let mut cache = self.cache.lock().unwrap();
                    for product in &fetched.products {
                        cache.insert(product.id, product.clone());
                    }
                    info!(
                        page,
                        count = fetched.products.len(),
                        cache_size = cache.len(),
                        "Page fetched"
                    );
                    drop(cache);
                    Outcome::Success(fetched)
                }
                None => {
                    warn!(page, status = reply.status, "Page reply had no body");
                    Outcome::error("Empty response body")
                }
            },
            Ok(reply) => {
                warn!(page, status = reply.status, "Page request rejected");
                classify_status(reply.status)
            }
            Err(err) => {
                warn!(page, error = %err, "Page request failed in transport");
                classify_transport(err)
            }
        }
    }

    #[instrument(skip(self))]
    async fn product_by_id(&self, id: i64) -> Outcome<Product> {
        let cached = self.cache.lock().unwrap().get(&id).cloned();
        match cached {
            Some(product) => {
                debug!(id, "Cache hit");
                Outcome::Success(product)
            }
            None => {
                debug!(id, "Cache miss");
                Outcome::error("Product not found")
            }
        }
    }
}
