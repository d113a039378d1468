//! # Auth State
//!
//! Shared handle to the Auth Gate. The gate guards its own status with a
//! short-lived lock, so this wrapper only adds cheap cloning.

use std::ops::Deref;
use std::sync::Arc;

use bookshelf_session::{AuthGate, SessionStore};

#[derive(Debug, Clone)]
pub struct AuthState {
    gate: Arc<AuthGate>,
}

impl AuthState {
    /// Restores the previous session from `store`, if one was saved.
    pub fn restore(store: Arc<dyn SessionStore>) -> Self {
        AuthState {
            gate: Arc::new(AuthGate::restore(store)),
        }
    }
}

impl Deref for AuthState {
    type Target = AuthGate;

    fn deref(&self) -> &AuthGate {
        &self.gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_session::{MemorySessionStore, DEMO_EMAIL, DEMO_PASSWORD};

    #[tokio::test]
    async fn test_clones_share_the_gate() {
        let state = AuthState::restore(Arc::new(MemorySessionStore::new()));
        let other = state.clone();

        state.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

        assert!(other.is_authenticated());
    }
}
