//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Presentation                Rust Service Layer                         │
//! │  ────────────                ──────────────────                         │
//! │                                                                         │
//! │  get_book(99)                                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog miss? ─── CoreError::BookNotFound(99) ────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Bad form? ────── ValidationError::Required ───── ApiError ────►│  │
//! │  │         │                                          ▲            │  │
//! │  │         ▼                                          │            │  │
//! │  │  Wrong password? ─ AuthError::InvalidCredentials ──┘            │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "NOT_FOUND", "message": "Book not found: 99" }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Errors cross into the presentation layer as JSON, so `ApiError` carries
//! both a machine-readable `code` and a human-readable `message`.

use serde::Serialize;

use bookshelf_core::{CoreError, ValidationError};
use bookshelf_session::AuthError;

use crate::state::ConfigError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the presentation layer receives when a command fails:
/// ```json
/// {
///   "code": "INVALID_CREDENTIALS",
///   "message": "Invalid credentials"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Presentation
/// ```typescript
/// try {
///   await invoke('place_order', { form });
/// } catch (e) {
///   switch (e.code) {
///     case 'UNAUTHENTICATED':
///       navigate('/login');
///       break;
///     case 'CART_ERROR':
///       navigate('/cart');
///       break;
///     case 'VALIDATION_ERROR':
///       showForm(e.message);
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Book or category not found (terminal "not found" view)
    NotFound,

    /// Form input failed validation (shown inline)
    ValidationError,

    /// Login rejected (shown inline, state unchanged)
    InvalidCredentials,

    /// Action needs a signed-in user (redirect to login)
    Unauthenticated,

    /// Cart cannot be used for this action, e.g. checkout of an empty cart
    CartError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unauthenticated error.
    pub fn unauthenticated() -> Self {
        ApiError::new(ErrorCode::Unauthenticated, "Please sign in to continue")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookNotFound(id) => ApiError::not_found("Book", &id.to_string()),
            CoreError::CategoryNotFound(name) => ApiError::not_found("Category", &name),
            CoreError::EmptyCart => ApiError::cart("Cart is empty"),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::new(ErrorCode::InvalidCredentials, err.to_string())
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::internal(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_serialize_screaming_snake_case() {
        let err = ApiError::from(AuthError::InvalidCredentials);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_CREDENTIALS");
        assert_eq!(json["message"], "Invalid credentials");

        let json = serde_json::to_value(ApiError::unauthenticated()).unwrap();
        assert_eq!(json["code"], "UNAUTHENTICATED");
    }

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::BookNotFound(99));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Book not found: 99");

        assert_eq!(ApiError::from(CoreError::EmptyCart).code, ErrorCode::CartError);

        let err = ApiError::from(CoreError::Validation(ValidationError::Required {
            field: "city".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "city is required");
    }

    #[test]
    fn test_display() {
        let err = ApiError::not_found("Category", "Horror");
        assert_eq!(err.to_string(), "[NotFound] Category not found: Horror");
    }
}
