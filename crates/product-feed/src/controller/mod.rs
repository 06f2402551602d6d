//! # List Controller
//!
//! The state owner for the product list screen. It orchestrates page loads
//! through the [`ProductRepository`] seam, accumulates pages into one
//! ordered collection, tracks pagination bookkeeping, and publishes every
//! transition through observable state cells.
//!
//! ## State machine
//!
//! The top-level [`UiState`] moves `Idle → Loading → {Success, Error}` and
//! re-enters `Loading` on [`ProductListController::retry`] and
//! [`ProductListController::refresh`]. Loads of page ≥ 1 never touch the
//! top-level state: they only flip
//! [`PaginationState::is_loading_next_page`], so an already-visible list is
//! not torn down by an infinite-scroll hiccup.
//!
//! ## Failure semantics
//!
//! Nothing is retried automatically. Page-0 failures replace the visible
//! content with `UiState::Error`; pagination failures are suppressed from
//! the published state entirely (logged, nothing else). No failure is fatal
//! to the controller; it stays usable after any outcome.

use crate::model::Product;
use crate::store::ProductRepository;
use feed_core::{Outcome, StateCell};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, instrument, warn};

/// Top-level screen state published to observers.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    /// No load has been attempted yet.
    Idle,
    /// A page-0 load is in flight.
    Loading,
    /// The accumulated product list, in arrival order with page-0 results
    /// first.
    Success(Vec<Product>),
    /// The latest page-0 load failed with this message.
    Error(String),
}

/// Infinite-scroll bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    /// Last successfully loaded page.
    pub current_page: u32,
    /// False once a page reply arrives without a `next_page`.
    pub has_next_page: bool,
    /// Back-pressure guard: true while a page ≥ 1 load is in flight.
    pub is_loading_next_page: bool,
    pub total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 0,
            has_next_page: true,
            is_loading_next_page: false,
            total_pages: 0,
        }
    }
}

/// Message shown when an unclassified fault reaches the screen.
const GENERIC_FAILURE: &str = "Network error occurred";

/// Orchestrates page loads and owns all published list state.
pub struct ProductListController {
    repository: Arc<dyn ProductRepository>,
    products: StateCell<Vec<Product>>,
    ui_state: StateCell<UiState>,
    pagination: StateCell<PaginationState>,
    refreshing: StateCell<bool>,
}

impl ProductListController {
    /// Construction publishes the initial (`Idle`, empty, default) values
    /// but does not load anything; the owner issues the first
    /// [`ProductListController::load_page`].
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            repository,
            products: StateCell::new(Vec::new()),
            ui_state: StateCell::new(UiState::Idle),
            pagination: StateCell::new(PaginationState::default()),
            refreshing: StateCell::new(false),
        }
    }

    // --- Observable streams (latest value replayed to new subscribers) ---

    pub fn products(&self) -> watch::Receiver<Vec<Product>> {
        self.products.subscribe()
    }

    pub fn ui_state(&self) -> watch::Receiver<UiState> {
        self.ui_state.subscribe()
    }

    pub fn pagination(&self) -> watch::Receiver<PaginationState> {
        self.pagination.subscribe()
    }

    pub fn refreshing(&self) -> watch::Receiver<bool> {
        self.refreshing.subscribe()
    }

    /// Snapshot of the current pagination bookkeeping.
    pub fn pagination_snapshot(&self) -> PaginationState {
        self.pagination.get()
    }

    /// Loads one page and folds the outcome into published state.
    ///
    /// Page 0 replaces the accumulated list and drives the top-level
    /// [`UiState`]; pages ≥ 1 append to it and only touch pagination state.
    #[instrument(skip(self))]
    pub async fn load_page(&self, page: u32) {
        if page == 0 {
            self.ui_state.set(UiState::Loading);
        } else {
            self.pagination.update(|p| p.is_loading_next_page = true);
        }

        match self.repository.fetch_page(page).await {
            Outcome::Success(fetched) => {
                let mut accumulated = if page == 0 {
                    Vec::new()
                } else {
                    self.products.get()
                };
                accumulated.extend(fetched.products);

                self.products.set(accumulated.clone());
                self.ui_state.set(UiState::Success(accumulated));
                self.pagination.set(PaginationState {
                    current_page: fetched.current_page,
                    has_next_page: fetched.next_page.is_some(),
                    is_loading_next_page: false,
                    total_pages: fetched.total_pages,
                });
            }
            Outcome::Error { message, code } => {
                warn!(page, ?code, %message, "Page load failed");
                if page == 0 {
                    self.ui_state.set(UiState::Error(message));
                } else {
                    // Pagination failures are silent at this layer.
                    self.pagination.update(|p| p.is_loading_next_page = false);
                }
            }
            Outcome::Fault(cause) => {
                error!(page, error = %cause, "Page load failed with unclassified error");
                if page == 0 {
                    self.ui_state.set(UiState::Error(GENERIC_FAILURE.to_string()));
                } else {
                    self.pagination.update(|p| p.is_loading_next_page = false);
                }
            }
        }

        self.refreshing.set(false);
    }

    /// Loads the page after the last loaded one.
    ///
    /// No-op unless a next page exists and none is already in flight; the
    /// claim of `is_loading_next_page` happens inside the cell's lock, so
    /// rapid repeated calls issue exactly one request.
    pub async fn load_next_page(&self) {
        let mut next = None;
        self.pagination.update(|p| {
            if p.has_next_page && !p.is_loading_next_page {
                p.is_loading_next_page = true;
                next = Some(p.current_page + 1);
            }
        });

        match next {
            Some(page) => self.load_page(page).await,
            None => debug!("Next-page load skipped"),
        }
    }

    /// Reissues the initial load.
    pub async fn retry(&self) {
        self.load_page(0).await;
    }

    /// Pull-to-refresh: resets pagination bookkeeping to its defaults and
    /// reloads page 0. The refreshing flag drops again once the load
    /// resolves, success or failure.
    pub async fn refresh(&self) {
        self.refreshing.set(true);
        self.pagination.set(PaginationState::default());
        self.load_page(0).await;
    }
}
