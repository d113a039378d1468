//! # Error Types
//!
//! Domain-specific error types for bookshelf-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookshelf-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog / cart domain errors                   │
//! │  └── ValidationError  - Form validation failures                       │
//! │                                                                         │
//! │  bookshelf-session errors (separate crate)                             │
//! │  ├── StoreError       - Session snapshot storage failures              │
//! │  └── AuthError        - Invalid credentials                            │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the presentation sees (serialized)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed numeric filter input is NOT an error anywhere in this crate;
//! the filter engine coerces it to "unconstrained".

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested book identifier is absent from the catalog.
    ///
    /// ## When This Occurs
    /// - A detail view is opened for an id that was never in the catalog
    /// - A stale link points at a book that is no longer bundled
    ///
    /// Surfaced as a terminal "not found" view, no retry.
    #[error("Book not found: {0}")]
    BookNotFound(u32),

    /// Requested category name is absent from the catalog.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Checked before a request reaches the Auth Gate or checkout, and shown
/// inline next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters long")]
    TooShort { field: String, min: usize },

    /// Invalid format (e.g., an email without a domain).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields that must match do not (password confirmation).
    #[error("{field} does not match {other}")]
    Mismatch { field: String, other: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::BookNotFound(99).to_string(), "Book not found: 99");
        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::TooShort {
            field: "password".to_string(),
            min: 6,
        };
        assert_eq!(
            err.to_string(),
            "password must be at least 6 characters long"
        );

        let err = ValidationError::Mismatch {
            field: "password".to_string(),
            other: "confirmation".to_string(),
        };
        assert_eq!(err.to_string(), "password does not match confirmation");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
