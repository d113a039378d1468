//! # Commands Module
//!
//! All commands exposed to the presentation layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Browse, search, detail, related
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── auth.rs      ◄─── Login, register, logout
//! ├── checkout.rs  ◄─── Order placement
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation host                                                      │
//! │  ─────────────────                                                      │
//! │  search_books(&storefront.catalog, query)                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Service Layer                                                     │
//! │  ──────────────────                                                     │
//! │  fn search_books(                                                       │
//! │      catalog: &Catalog,       ◄── Only the state it needs              │
//! │      query: CatalogQuery,     ◄── Raw params from the URL              │
//! │  ) -> SearchResponse                                                    │
//! │         │                                                               │
//! │         │ (JSON serialization by the host)                              │
//! │         ▼                                                               │
//! │  Presentation receives: { books, total, criteria, sort }                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn get_book(catalog: &Catalog, book_id: u32)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs both
//! fn add_to_cart(catalog: &Catalog, cart: &CartState, ...)
//!
//! // Needs auth, cart and config
//! async fn place_order(auth: &AuthState, cart: &CartState, config: &ConfigState, ...)
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
