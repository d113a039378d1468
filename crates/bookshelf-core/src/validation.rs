//! # Validation Module
//!
//! Form validation for registration and checkout.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command (Rust)                                    │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: form rules                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Auth Gate / Checkout                                         │
//! │  └── Trusts its input; does not re-validate                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validators stop at the first failing field, in form order.
//!
//! ## Usage
//! ```rust
//! use bookshelf_core::validation::RegistrationForm;
//!
//! let form = RegistrationForm {
//!     email: "jane@example.com".to_string(),
//!     password: "secret1".to_string(),
//!     confirm_password: "secret1".to_string(),
//!     first_name: "Jane".to_string(),
//!     last_name: "Roe".to_string(),
//! };
//! assert!(form.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{PaymentMethod, ShippingAddress};
use crate::MIN_PASSWORD_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates that a field is present after trimming.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@`, with a non-empty local part
/// - Domain contains a dot that is neither its first nor last character
/// - No whitespace
///
/// ## Example
/// ```rust
/// use bookshelf_core::validation::validate_email;
///
/// assert!(validate_email("demo@example.com").is_ok());
/// assert!(validate_email("demo@localhost").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    validate_required("email", email)?;

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain @"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must look like name@domain.tld"));
    }

    let dotted = domain
        .find('.')
        .is_some_and(|i| i > 0 && !domain.ends_with('.'));
    if !dotted {
        return Err(invalid("must look like name@domain.tld"));
    }

    Ok(())
}

/// Validates a new password and its confirmation.
///
/// ## Rules
/// - At least [`MIN_PASSWORD_LENGTH`] characters
/// - Confirmation must match exactly
pub fn validate_password(password: &str, confirmation: &str) -> ValidationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LENGTH,
        });
    }

    if password != confirmation {
        return Err(ValidationError::Mismatch {
            field: "password".to_string(),
            other: "confirmation".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Registration Form
// =============================================================================

/// The sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegistrationForm {
    /// Checks names, email shape and password rules.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("firstName", &self.first_name)?;
        validate_required("lastName", &self.last_name)?;
        validate_email(&self.email)?;
        validate_password(&self.password, &self.confirm_password)
    }
}

// =============================================================================
// Checkout Form
// =============================================================================

/// What the checkout page submits alongside the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutForm {
    pub shipping_address: ShippingAddress,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub notes: Option<String>,
}

impl CheckoutForm {
    /// Checks that every shipping field except country is filled in and the
    /// email is well formed. Country falls back to a default elsewhere.
    pub fn validate(&self) -> ValidationResult<()> {
        let address = &self.shipping_address;
        validate_required("firstName", &address.first_name)?;
        validate_required("lastName", &address.last_name)?;
        validate_email(&address.email)?;
        validate_required("phone", &address.phone)?;
        validate_required("address", &address.address)?;
        validate_required("city", &address.city)?;
        validate_required("postalCode", &address.postal_code)
    }

    /// Notes with surrounding whitespace removed, `None` when blank.
    pub fn trimmed_notes(&self) -> Option<String> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
