//! # bookshelf-session: Session Snapshot and Auth Gate
//!
//! This crate provides the storefront's only persisted state: the signed-in
//! user, stored as a JSON snapshot under a well-known key.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bookshelf Session Flow                              │
//! │                                                                         │
//! │  login / register / logout command                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                bookshelf-session (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐          ┌──────────────────────────┐ │   │
//! │  │   │      AuthGate      │          │      SessionStore        │ │   │
//! │  │   │     (auth.rs)      │  save ──►│      (store.rs)          │ │   │
//! │  │   │                    │  remove ►│                          │ │   │
//! │  │   │ Anonymous          │◄─ load ──│  FileSessionStore        │ │   │
//! │  │   │ Authenticated(User)│          │  MemorySessionStore      │ │   │
//! │  │   └────────────────────┘          └──────────────────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          <data dir>/user.json   (camelCase User JSON)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Key/value snapshot storage
//! - [`auth`] - The Auth Gate state machine
//! - [`error`] - Storage and authentication error types
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use bookshelf_session::{AuthGate, MemorySessionStore};
//!
//! # tokio_test_block(async {
//! let gate = AuthGate::restore(Arc::new(MemorySessionStore::new()));
//! assert!(!gate.is_authenticated());
//!
//! let user = gate.login("demo@example.com", "demo123").await.unwrap();
//! assert_eq!(user.first_name, "John");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::{demo_user, AuthGate, AuthStatus, DEMO_EMAIL, DEMO_PASSWORD};
pub use error::{AuthError, AuthResult, StoreError, StoreResult};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, SESSION_KEY};
