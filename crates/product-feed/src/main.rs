//! # Product Feed Demo
//!
//! Drives the data layer end to end against a live listing endpoint:
//! 1. Builds the config/API/store/controller stack.
//! 2. Loads the first page and pages forward once.
//! 3. Looks a cached product up by id.
//!
//! Point it at a listing with `FEED_BASE_URL` and watch with `RUST_LOG=info`.

use feed_core::tracing::setup_tracing;
use product_feed::api::HttpProductApi;
use product_feed::config::FeedConfig;
use product_feed::controller::{ProductListController, UiState};
use product_feed::store::{ProductRepository, ProductStore};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = FeedConfig::from_env();
    info!(base_url = %config.base_url, page_size = config.page_size, "Starting product feed demo");

    let api = HttpProductApi::new(config).map_err(|e| e.to_string())?;
    let store = Arc::new(ProductStore::new(api));
    let controller = ProductListController::new(store.clone());

    controller.load_page(0).await;

    let settled = controller.ui_state().borrow().clone();
    match settled {
        UiState::Success(listed) => {
            info!(count = listed.len(), "Initial page loaded");
            if let Some(first) = listed.first() {
                store
                    .product_by_id(first.id)
                    .await
                    .on_success(|found| info!(id = found.id, title = %found.title, "Cache lookup hit"))
                    .on_error(|message, _| error!(%message, "Cache lookup failed"));
            }
        }
        UiState::Error(message) => {
            error!(%message, "Initial load failed");
            return Err(message);
        }
        other => info!(state = ?other, "Initial load settled unexpectedly"),
    }

    if controller.pagination_snapshot().has_next_page {
        controller.load_next_page().await;
        let pagination = controller.pagination_snapshot();
        info!(
            count = controller.products().borrow().len(),
            current_page = pagination.current_page,
            total_pages = pagination.total_pages,
            "After paging forward"
        );
    }

    info!("Demo completed");
    Ok(())
}
