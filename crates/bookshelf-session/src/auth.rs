//! # Auth Gate
//!
//! Tracks whether the storefront has a signed-in user and keeps the session
//! snapshot in sync with that state.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Auth Gate States                                 │
//! │                                                                         │
//! │            login(demo creds) / register(..)                             │
//! │   ┌───────────┐ ─────────────────────────────► ┌─────────────────────┐  │
//! │   │ Anonymous │                                │ Authenticated(User) │  │
//! │   └───────────┘ ◄───────────────────────────── └─────────────────────┘  │
//! │        ▲                  logout()                       ▲              │
//! │        │                                                 │              │
//! │        └──── restore(): no / corrupt snapshot            │              │
//! │                  restore(): valid snapshot ──────────────┘              │
//! │                                                                         │
//! │  login(bad creds) ──► Err(InvalidCredentials), state unchanged         │
//! │                                                                         │
//! │  Snapshot side effects:                                                 │
//! │    login/register ──► save("user", json)                                │
//! │    logout ──────────► remove("user")                                    │
//! │    storage failure ─► warn! only, transition still happens             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Restore Trust
//! A restored snapshot is taken at face value: it is not checked against
//! any credential source.

use chrono::Utc;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use bookshelf_core::User;

use crate::error::{AuthError, AuthResult, StoreError};
use crate::store::{SessionStore, SESSION_KEY};

/// The only email accepted by [`AuthGate::login`].
pub const DEMO_EMAIL: &str = "demo@example.com";

/// The only password accepted by [`AuthGate::login`].
pub const DEMO_PASSWORD: &str = "demo123";

/// Current authentication state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl AuthStatus {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthStatus::Anonymous => None,
            AuthStatus::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated(_))
    }
}

/// The fixed user returned by a successful demo login.
pub fn demo_user() -> User {
    User {
        id: "1".to_string(),
        email: DEMO_EMAIL.to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        is_authenticated: true,
        phone: Some("+1 (555) 123-4567".to_string()),
        address: Some("123 Main Street, City, State 12345".to_string()),
        bio: Some("Book lover and avid reader. Always looking for the next great story.".to_string()),
    }
}

/// Holds the authentication state and the store its snapshot lives in.
///
/// ## Thread Safety
/// The status sits behind a `Mutex` that is only locked for the duration
/// of a read or a swap, never across an `.await`.
#[derive(Debug)]
pub struct AuthGate {
    store: Arc<dyn SessionStore>,
    status: Mutex<AuthStatus>,
}

impl AuthGate {
    /// Creates an anonymous gate without looking at the store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        AuthGate {
            store,
            status: Mutex::new(AuthStatus::Anonymous),
        }
    }

    /// Creates a gate from the snapshot in `store`, if any.
    ///
    /// ## Behavior
    /// - No snapshot: Anonymous
    /// - Valid snapshot: Authenticated with the stored user
    /// - Unreadable or corrupt snapshot: discarded, Anonymous
    pub fn restore(store: Arc<dyn SessionStore>) -> Self {
        let status = match store.load(SESSION_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<User>(&json) {
                Ok(user) => {
                    info!(user_id = %user.id, "Session restored");
                    AuthStatus::Authenticated(user)
                }
                Err(source) => {
                    let err = StoreError::Corrupt {
                        key: SESSION_KEY.to_string(),
                        source,
                    };
                    warn!(error = %err, "Discarding corrupt session snapshot");
                    if let Err(e) = store.remove(SESSION_KEY) {
                        warn!(error = %e, "Failed to remove corrupt session snapshot");
                    }
                    AuthStatus::Anonymous
                }
            },
            Ok(None) => {
                debug!("No session snapshot");
                AuthStatus::Anonymous
            }
            Err(e) => {
                warn!(error = %e, "Failed to read session snapshot");
                AuthStatus::Anonymous
            }
        };

        AuthGate {
            store,
            status: Mutex::new(status),
        }
    }

    /// Signs in with email and password.
    ///
    /// Only [`DEMO_EMAIL`] / [`DEMO_PASSWORD`] is accepted. Async so callers
    /// are already shaped for a networked credential check.
    ///
    /// ## Errors
    /// `AuthError::InvalidCredentials`; the current state is left as is.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            info!(email, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let user = demo_user();
        self.sign_in(user.clone());
        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// Creates an account and signs it in. Always succeeds.
    ///
    /// The password is not stored anywhere; form rules are checked by the
    /// caller before this point.
    pub async fn register(
        &self,
        email: &str,
        _password: &str,
        first_name: &str,
        last_name: &str,
    ) -> User {
        let user = User {
            id: Utc::now().timestamp_millis().to_string(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            is_authenticated: true,
            phone: None,
            address: None,
            bio: None,
        };

        self.sign_in(user.clone());
        info!(user_id = %user.id, "User registered");
        user
    }

    /// Signs out and removes the snapshot.
    pub fn logout(&self) {
        let previous = std::mem::take(&mut *self.lock());

        if let Err(e) = self.store.remove(SESSION_KEY) {
            warn!(error = %e, "Failed to remove session snapshot");
        }

        match previous.user() {
            Some(user) => info!(user_id = %user.id, "User logged out"),
            None => debug!("Logout while anonymous"),
        }
    }

    /// Snapshot of the current state.
    pub fn status(&self) -> AuthStatus {
        self.lock().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.lock().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_authenticated()
    }

    fn sign_in(&self, user: User) {
        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.store.save(SESSION_KEY, &json) {
                    warn!(error = %e, "Failed to persist session snapshot");
                }
            }
            Err(e) => warn!(error = %e, "Failed to encode session snapshot"),
        }

        *self.lock() = AuthStatus::Authenticated(user);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AuthStatus> {
        self.status.lock().expect("auth state mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileSessionStore, MemorySessionStore};
    use crate::StoreResult;
    use tempfile::TempDir;

    /// A store whose every operation fails.
    #[derive(Debug)]
    struct BrokenStore;

    fn denied() -> StoreError {
        StoreError::io(
            "/readonly/user.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        )
    }

    impl SessionStore for BrokenStore {
        fn load(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(denied())
        }
        fn save(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(denied())
        }
        fn remove(&self, _key: &str) -> StoreResult<()> {
            Err(denied())
        }
    }

    #[tokio::test]
    async fn test_demo_login() {
        let store = Arc::new(MemorySessionStore::new());
        let gate = AuthGate::new(store.clone());

        let user = gate.login("demo@example.com", "demo123").await.unwrap();

        assert_eq!(user.id, "1");
        assert_eq!(user.full_name(), "John Doe");
        assert_eq!(user.phone.as_deref(), Some("+1 (555) 123-4567"));
        assert!(user.is_authenticated);
        assert_eq!(gate.status(), AuthStatus::Authenticated(user));
        assert!(store.contains(SESSION_KEY));
    }

    #[tokio::test]
    async fn test_bad_credentials_leave_state_unchanged() {
        let store = Arc::new(MemorySessionStore::new());
        let gate = AuthGate::new(store.clone());

        let result = gate.login("demo@example.com", "wrong").await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert_eq!(gate.status(), AuthStatus::Anonymous);
        assert!(!store.contains(SESSION_KEY));

        // Already signed in: a failed attempt does not sign out
        gate.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert!(gate.login("other@example.com", "demo123").await.is_err());
        assert!(gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_signs_in() {
        let store = Arc::new(MemorySessionStore::new());
        let gate = AuthGate::new(store.clone());

        let before = Utc::now().timestamp_millis();
        let user = gate.register("jane@example.com", "secret1", "Jane", "Roe").await;

        assert!(user.id.parse::<i64>().unwrap() >= before);
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.bio, None);
        assert_eq!(gate.current_user(), Some(user));
        assert!(store.contains(SESSION_KEY));
    }

    #[tokio::test]
    async fn test_logout_removes_snapshot() {
        let store = Arc::new(MemorySessionStore::new());
        let gate = AuthGate::new(store.clone());
        gate.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

        gate.logout();

        assert_eq!(gate.status(), AuthStatus::Anonymous);
        assert!(!store.contains(SESSION_KEY));
    }

    #[tokio::test]
    async fn test_restore_from_file_snapshot() {
        let dir = TempDir::new().unwrap();
        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(dir.path()));

        let gate = AuthGate::restore(store.clone());
        assert!(!gate.is_authenticated());
        gate.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        drop(gate);

        // Next process start
        let restored = AuthGate::restore(store);
        assert_eq!(restored.current_user(), Some(demo_user()));
    }

    #[test]
    fn test_restore_corrupt_snapshot_is_discarded() {
        let store = Arc::new(MemorySessionStore::with_value(SESSION_KEY, "{not json"));

        let gate = AuthGate::restore(store.clone());

        assert_eq!(gate.status(), AuthStatus::Anonymous);
        assert!(!store.contains(SESSION_KEY));
    }

    #[test]
    fn test_restore_trusts_snapshot() {
        let json = r#"{"id":"777","email":"x@y.zz","firstName":"X","lastName":"Y","isAuthenticated":true}"#;
        let store = Arc::new(MemorySessionStore::with_value(SESSION_KEY, json));

        let gate = AuthGate::restore(store);
        assert_eq!(gate.current_user().map(|u| u.id), Some("777".to_string()));
    }

    #[tokio::test]
    async fn test_storage_failures_do_not_block_transitions() {
        let gate = AuthGate::restore(Arc::new(BrokenStore));
        assert!(!gate.is_authenticated());

        gate.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert!(gate.is_authenticated());

        gate.logout();
        assert!(!gate.is_authenticated());
    }
}
