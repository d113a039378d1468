//! # Bookshelf Storefront Library
//!
//! Service layer of the Bookshelf storefront. A presentation host (web
//! view, HTTP adapter, test harness) builds one [`Storefront`] and calls the
//! functions in [`commands`] with the state each one needs.
//!
//! ## Module Organization
//! ```text
//! bookshelf_storefront/
//! ├── lib.rs          ◄─── You are here (bootstrap & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── auth.rs     ◄─── Auth gate wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Browse/search/detail commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── auth.rs     ◄─── Login/register/logout commands
//! │   ├── checkout.rs ◄─── Order placement
//! │   └── config.rs   ◄─── Config retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single god object, state is split into focused types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront State                                     │
//! │                                                                         │
//! │  ┌────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────────┐ │
//! │  │  Catalog   │ │  CartState   │ │  AuthState   │ │  ConfigState     │ │
//! │  │            │ │              │ │              │ │                  │ │
//! │  │ • Books    │ │ • Cart items │ │ • Auth gate  │ │ • Store name     │ │
//! │  │ • Category │ │ • Totals     │ │ • Snapshot   │ │ • Currency       │ │
//! │  │ (readonly) │ │ (Mutex)      │ │   store      │ │ • Checkout delay │ │
//! │  └────────────┘ └──────────────┘ └──────────────┘ └──────────────────┘ │
//! │                                                                         │
//! │  Each command only requests the state it needs.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bookshelf_core::Catalog;
use bookshelf_session::{FileSessionStore, SessionStore};

use state::{AuthState, CartState, ConfigError, ConfigState};

/// Everything the commands operate on, built once at startup.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub catalog: Arc<Catalog>,
    pub cart: CartState,
    pub auth: AuthState,
    pub config: ConfigState,
}

impl Storefront {
    /// Builds the storefront over the bundled catalog with an empty cart,
    /// restoring any signed-in user from `store`.
    pub fn new(config: ConfigState, store: Arc<dyn SessionStore>) -> Self {
        Storefront {
            catalog: Arc::new(Catalog::bundled()),
            cart: CartState::new(),
            auth: AuthState::restore(store),
            config,
        }
    }

    /// Builds the storefront with a file-backed session store.
    ///
    /// ## Errors
    /// `ConfigError::NoDataDir` when no session dir is configured and the
    /// platform has no data directory.
    pub fn bootstrap(config: ConfigState) -> Result<Self, ConfigError> {
        let dir = session_dir(&config)?;
        info!(?dir, "Session directory determined");

        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(dir));
        Ok(Storefront::new(config, store))
    }
}

/// Runs the storefront headless: loads configuration, restores the session
/// and reports what was loaded.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • BOOKSHELF_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Determine Session Directory ──────────────────────────────────────► │
/// │     • BOOKSHELF_SESSION_DIR, else the platform data directory           │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • Catalog: bundled books and categories                             │
/// │     • CartState: Empty cart with Mutex for thread-safe updates          │
/// │     • AuthState: Gate restored from the session snapshot                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Bookshelf storefront");

    let config = ConfigState::from_env()?;
    debug!(config = %serde_json::to_string(&config)?, "Configuration loaded");

    let storefront = Storefront::bootstrap(config)?;

    info!(
        store = %storefront.config.store_name,
        books = storefront.catalog.books().len(),
        categories = storefront.catalog.categories().len(),
        signed_in = ?storefront.auth.current_user().map(|u| u.email),
        "Storefront ready"
    );

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bookshelf=trace` - Show trace for bookshelf crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bookshelf=debug"));

    // A host may have installed its own subscriber already.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Determines where the session snapshot lives.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.bookshelf.storefront`
/// - **Windows**: `%APPDATA%\bookshelf\storefront\data`
/// - **Linux**: `~/.local/share/storefront`
///
/// ## Development Override
/// `BOOKSHELF_SESSION_DIR` (read into `ConfigState::session_dir`).
fn session_dir(config: &ConfigState) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = &config.session_dir {
        return Ok(dir.clone());
    }

    let proj_dirs =
        ProjectDirs::from("com", "bookshelf", "storefront").ok_or(ConfigError::NoDataDir)?;

    Ok(proj_dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_session::{MemorySessionStore, DEMO_EMAIL, DEMO_PASSWORD};
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> ConfigState {
        ConfigState {
            checkout_delay_ms: 0,
            session_dir: Some(dir.path().to_path_buf()),
            ..ConfigState::default()
        }
    }

    #[test]
    fn test_new_storefront_is_fresh() {
        let storefront =
            Storefront::new(ConfigState::default(), Arc::new(MemorySessionStore::new()));

        assert_eq!(storefront.catalog.books().len(), 12);
        assert!(storefront.cart.with_cart(|c| c.is_empty()));
        assert!(!storefront.auth.is_authenticated());
    }

    #[test]
    fn test_session_dir_override() {
        let dir = TempDir::new().unwrap();
        assert_eq!(session_dir(&config_in(&dir)).unwrap(), dir.path());
    }

    #[tokio::test]
    async fn test_bootstrap_restores_previous_session() {
        let dir = TempDir::new().unwrap();

        let first = Storefront::bootstrap(config_in(&dir)).unwrap();
        first.auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

        let second = Storefront::bootstrap(config_in(&dir)).unwrap();
        assert_eq!(
            second.auth.current_user().map(|u| u.email),
            Some(DEMO_EMAIL.to_string())
        );
        assert!(second.cart.with_cart(|c| c.is_empty()));
    }
}
