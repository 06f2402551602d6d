//! # Product Feed
//!
//! The data layer for a paginated product catalog: fetches pages from a
//! remote listing endpoint, caches every product it has seen by id, and
//! publishes list/UI/pagination state to observers.
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`Product`](model::Product),
//!   [`PageResponse`](model::PageResponse)) matching the wire schema.
//! - **[api]**: The transport seam ([`ProductApi`](api::ProductApi)) and its
//!   reqwest-backed implementation ([`HttpProductApi`](api::HttpProductApi)).
//! - **[store]**: The caching repository
//!   ([`ProductStore`](store::ProductStore)) behind the
//!   [`ProductRepository`](store::ProductRepository) seam.
//! - **[controller]**: The list state owner
//!   ([`ProductListController`](controller::ProductListController)), which
//!   accumulates pages and publishes
//!   [`UiState`](controller::UiState) transitions.
//! - **[config]**: Request defaults (base URL, page size, category filter).
//!
//! ## Quick Start
//!
//! The demo entry point is in `main.rs`, which demonstrates:
//! 1. Building the config/API/store/controller stack.
//! 2. Loading the first page and paging forward.
//! 3. Looking a cached product up by id.
//!
//! ## Testing
//!
//! Both seams are async traits, so tests stub the repository to exercise the
//! controller and stub the API to exercise the store, without any network.

pub mod api;
pub mod config;
pub mod controller;
pub mod model;
pub mod store;
