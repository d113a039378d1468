//! # Domain Types
//!
//! Core domain types used throughout the Bookshelf storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Book       │   │    Category     │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (u32)       │   │  id (String)    │       │
//! │  │  title, author  │   │  name (unique)  │   │  email          │       │
//! │  │  price (Money)  │   │  description    │   │  first/last     │       │
//! │  │  rating         │   │  icon           │   │  authenticated  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Rating      │   │      Order      │   │ ShippingAddress │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  tenths (u8)    │   │  items, total   │   │  name, email    │       │
//! │  │  45 = 4.5 stars │   │  status         │   │  address, city  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types serialize with camelCase field names, matching what the
//! presentation layer and the persisted session snapshot expect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::cart::CartItem;
use crate::money::Money;

// =============================================================================
// Rating
// =============================================================================

/// Average review score on a 0–5 star scale, stored in tenths of a star.
///
/// ## Why Tenths?
/// Ratings are compared (min-rating filter) and sorted. Integer tenths give
/// a total order without float comparisons: 45 = 4.5 stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating(u8);

impl Rating {
    /// Highest possible rating (5.0 stars).
    pub const MAX: Rating = Rating(50);

    /// Creates a rating from tenths of a star.
    #[inline]
    pub const fn from_tenths(tenths: u8) -> Self {
        Rating(tenths)
    }

    /// Creates a rating from a star count (for convenience).
    ///
    /// Input outside the 0–5 star scale saturates to its nearest end.
    pub fn from_stars(stars: f64) -> Self {
        Rating((stars * 10.0).round().clamp(0.0, f64::from(Rating::MAX.0)) as u8)
    }

    /// Parses a rating typed or selected by a user ("4", "4.5").
    ///
    /// Returns `None` for anything that is not a finite number; the filter
    /// engine treats that as "no minimum rating".
    pub fn parse(input: &str) -> Option<Self> {
        let stars: f64 = input.trim().parse().ok()?;
        stars.is_finite().then(|| Rating::from_stars(stars))
    }

    /// Returns the rating in tenths of a star.
    #[inline]
    pub const fn tenths(&self) -> u8 {
        self.0
    }

    /// Returns the rating as a star count (for display only).
    #[inline]
    pub fn stars(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book available for browsing. Immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Book {
    /// Unique, stable identifier.
    pub id: u32,

    pub title: String,

    pub author: String,

    /// Price in cents.
    pub price: Money,

    /// Cover image URL.
    pub image: String,

    pub description: String,

    /// Primary category label (exact-match target of the category filter).
    pub category: String,

    /// Secondary labels, primary category usually first.
    pub categories: Vec<String>,

    pub rating: Rating,

    /// Number of reviews behind `rating`.
    pub reviews: u32,

    /// Negative values would be BCE; the bundled catalog has none.
    pub published_year: i32,

    pub pages: u32,

    pub language: String,

    pub isbn: String,

    /// Units in stock. Informational only, the cart does not enforce it.
    pub stock: u32,
}

impl Book {
    /// Checks if `label` is the primary category or one of the secondary ones.
    pub fn has_category(&self, label: &str) -> bool {
        self.category == label || self.categories.iter().any(|c| c == label)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A browsable category of books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub id: u32,
    /// Unique; matched against `Book::category`.
    pub name: String,
    pub description: String,
    /// Emoji glyph shown next to the name.
    pub icon: String,
}

// =============================================================================
// User
// =============================================================================

/// A signed-in storefront user.
///
/// This is also the session snapshot: it is serialized as-is (camelCase
/// JSON) under the `"user"` key and deserialized on startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub bio: Option<String>,
}

impl User {
    /// Returns "First Last" for greetings and order forms.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Payment option picked at checkout. Nothing is actually charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    DebitCard,
    #[serde(rename = "paypal")]
    PayPal,
    CashOnDelivery,
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrderStatus {
    /// Order was just submitted.
    #[default]
    Pending,
    Completed,
    Cancelled,
    Shipped,
    Delivered,
}

// =============================================================================
// Shipping Address
// =============================================================================

/// Shipping details collected by the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingAddress {
    /// Pre-fills name and email from the signed-in user, like the checkout
    /// form does. Country defaults to "United States".
    pub fn prefilled_for(user: &User) -> Self {
        ShippingAddress {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            country: "United States".to_string(),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A submitted order. Uses the snapshot pattern: items keep the book data
/// they had when the order was placed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartItem>,
    /// Cart total at submission. Shipping is free.
    pub total: Money,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub notes: Option<String>,
}

impl Order {
    /// Total number of units across all items.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user() -> User {
        User {
            id: "1".to_string(),
            email: "demo@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            is_authenticated: true,
            phone: None,
            address: None,
            bio: None,
        }
    }

    #[test]
    fn test_rating_from_stars() {
        assert_eq!(Rating::from_stars(4.5).tenths(), 45);
        assert_eq!(Rating::from_stars(4.8), Rating::from_tenths(48));
        assert_eq!(Rating::from_stars(-1.0), Rating::from_tenths(0));
        assert_eq!(Rating::from_stars(7.0), Rating::MAX);
        assert_eq!(Rating::from_tenths(43).to_string(), "4.3");
        assert!((Rating::from_tenths(46).stars() - 4.6).abs() < 0.001);
    }

    #[test]
    fn test_rating_parse() {
        assert_eq!(Rating::parse("4"), Some(Rating::from_tenths(40)));
        assert_eq!(Rating::parse(" 4.5 "), Some(Rating::from_tenths(45)));
        assert_eq!(Rating::parse("9"), Some(Rating::MAX));
        assert_eq!(Rating::parse("four"), None);
        assert_eq!(Rating::parse(""), None);
        assert_eq!(Rating::parse("NaN"), None);
        assert_eq!(Rating::parse("inf"), None);
    }

    #[test]
    fn test_user_snapshot_is_camel_case() {
        let json = serde_json::to_value(demo_user()).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["isAuthenticated"], true);
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_user_snapshot_tolerates_missing_optionals() {
        let json = r#"{"id":"42","email":"a@b.co","firstName":"A","lastName":"B","isAuthenticated":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.bio, None);
        assert_eq!(user.full_name(), "A B");
    }

    #[test]
    fn test_payment_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"credit-card\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::PayPal).unwrap(),
            "\"paypal\""
        );
        let parsed: PaymentMethod = serde_json::from_str("\"cash-on-delivery\"").unwrap();
        assert_eq!(parsed, PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn test_shipping_prefill() {
        let address = ShippingAddress::prefilled_for(&demo_user());
        assert_eq!(address.first_name, "John");
        assert_eq!(address.email, "demo@example.com");
        assert_eq!(address.country, "United States");
        assert!(address.city.is_empty());
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
