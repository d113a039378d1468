//! # Bookshelf Storefront Entry Point
//!
//! Headless entry point: bootstraps the service layer and reports what it
//! loaded. Presentation hosts link `bookshelf_storefront` directly.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Determine the session directory
//! 4. Create state objects (Catalog, CartState, AuthState, ConfigState)

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    bookshelf_storefront::run().await
}
