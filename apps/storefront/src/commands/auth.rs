//! # Auth Commands
//!
//! Sign in, sign up and sign out.
//!
//! ## Login Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Login form submit                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  login(email, password).await                                          │
//! │       │                                                                 │
//! │       ├── demo@example.com / demo123 ──► User, snapshot saved          │
//! │       │                                                                 │
//! │       └── anything else ──────────────► INVALID_CREDENTIALS            │
//! │                                                                         │
//! │  Register form submit                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RegistrationForm::validate() ──fail──► VALIDATION_ERROR               │
//! │       │ ok                                                              │
//! │       ▼                                                                 │
//! │  register(..).await ──────────────────► User, snapshot saved           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use bookshelf_core::validation::RegistrationForm;
use bookshelf_core::User;

use crate::error::ApiError;
use crate::state::AuthState;

/// Signs in.
///
/// ## Errors
/// `INVALID_CREDENTIALS`; any existing session is kept.
pub async fn login(auth: &AuthState, email: String, password: String) -> Result<User, ApiError> {
    debug!(email = %email, "login command");
    Ok(auth.login(email.trim(), &password).await?)
}

/// Validates the sign-up form, then creates and signs in the account.
///
/// ## Errors
/// `VALIDATION_ERROR` naming the first invalid field.
pub async fn register(auth: &AuthState, form: RegistrationForm) -> Result<User, ApiError> {
    debug!(email = %form.email, "register command");
    form.validate()?;

    let user = auth
        .register(
            form.email.trim(),
            &form.password,
            form.first_name.trim(),
            form.last_name.trim(),
        )
        .await;
    Ok(user)
}

/// Signs out. Safe to call when nobody is signed in.
pub fn logout(auth: &AuthState) {
    debug!("logout command");
    auth.logout();
}

/// Gets the signed-in user, if any.
pub fn current_user(auth: &AuthState) -> Option<User> {
    debug!("current_user command");
    auth.current_user()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bookshelf_session::{MemorySessionStore, SessionStore, SESSION_KEY};
    use std::sync::Arc;

    fn auth_with_store() -> (AuthState, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        (AuthState::restore(store.clone()), store)
    }

    fn form() -> RegistrationForm {
        RegistrationForm {
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Roe".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_demo_user() {
        let (auth, store) = auth_with_store();

        let user = login(&auth, "demo@example.com".into(), "demo123".into())
            .await
            .unwrap();

        assert_eq!(user.id, "1");
        assert_eq!(current_user(&auth), Some(user));
        assert!(store.load(SESSION_KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let (auth, _store) = auth_with_store();

        let err = login(&auth, "demo@example.com".into(), "demo124".into())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(current_user(&auth), None);
    }

    #[tokio::test]
    async fn test_register_validates_first() {
        let (auth, store) = auth_with_store();
        let short = RegistrationForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..form()
        };

        let err = register(&auth, short).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("at least 6"));
        assert!(!store.contains(SESSION_KEY));
    }

    #[tokio::test]
    async fn test_register_signs_in() {
        let (auth, _store) = auth_with_store();

        let user = register(&auth, form()).await.unwrap();

        assert_eq!(user.full_name(), "Jane Roe");
        assert!(user.is_authenticated);
        assert_eq!(current_user(&auth).map(|u| u.email), Some("jane@example.com".to_string()));
    }

    #[tokio::test]
    async fn test_logout() {
        let (auth, store) = auth_with_store();
        login(&auth, "demo@example.com".into(), "demo123".into())
            .await
            .unwrap();

        logout(&auth);

        assert_eq!(current_user(&auth), None);
        assert!(!store.contains(SESSION_KEY));
    }
}
