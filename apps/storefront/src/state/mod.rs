//! # State Module
//!
//! Manages storefront state.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront (built once at startup)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │       ┌──────────────┬───────┴──────┬──────────────────┐               │
//! │       ▼              ▼              ▼                  ▼                │
//! │  ┌──────────┐  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐    │
//! │  │ Catalog  │  │  CartState   │  │  AuthState   │  │ ConfigState  │    │
//! │  │          │  │              │  │              │  │              │    │
//! │  │ 12 books │  │  Arc<Mutex<  │  │  Arc<Auth    │  │ store_name   │    │
//! │  │ 9 cats   │  │    Cart      │  │    Gate>     │  │ delay        │    │
//! │  │          │  │  >>          │  │              │  │ session dir  │    │
//! │  └──────────┘  └──────────────┘  └──────────────┘  └──────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Catalog: immutable                                                  │
//! │  • CartState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • AuthState: the gate locks its own status                            │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod cart;
mod config;

pub use auth::AuthState;
pub use cart::CartState;
pub use config::{ConfigError, ConfigState, DEFAULT_CHECKOUT_DELAY_MS};
