//! # bookshelf-core: Pure Business Logic for the Bookshelf Storefront
//!
//! This crate holds every rule of the storefront that can be expressed
//! without I/O: the bundled catalog, the filter/sort engine, cart math and
//! form validation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bookshelf Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (not in this repo)                 │   │
//! │  │   Books ──► Search ──► Book Detail ──► Cart ──► Checkout        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (commands)                      │   │
//! │  │   search_books, add_to_cart, login, place_order, etc.           │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌────────▼──────────────────┐    │
//! │  │   ★ bookshelf-core (THIS) ★     │  │   bookshelf-session       │    │
//! │  │                                 │  │   snapshot + Auth Gate    │    │
//! │  │  catalog  filter  cart  types   │  └───────────────────────────┘    │
//! │  │  money    validation  error     │                                   │
//! │  │                                 │                                   │
//! │  │  NO I/O • NO STORAGE • PURE     │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, Category, User, Order, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The bundled, read-only catalog store
//! - [`filter`] - Filter criteria, sort keys and the search pipeline
//! - [`cart`] - Cart aggregator
//! - [`validation`] - Registration and shipping form validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bookshelf_core::{filter, Catalog, FilterCriteria, SortKey};
//!
//! let catalog = Catalog::bundled();
//! let criteria = FilterCriteria {
//!     category: Some("Fantasy".to_string()),
//!     ..FilterCriteria::default()
//! };
//!
//! let results = filter::search(catalog.books(), &criteria, SortKey::Relevance);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].title, "The Hobbit");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{CatalogQuery, FilterCriteria, SortKey};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of books shown in the home page "featured" strip.
pub const FEATURED_BOOK_COUNT: usize = 3;

/// Maximum number of related books shown on a book detail view.
pub const RELATED_BOOK_LIMIT: usize = 4;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;
