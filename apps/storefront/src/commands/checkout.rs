//! # Checkout Commands
//!
//! Turns the cart of a signed-in user into an order.
//!
//! ## Checkout Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order(form)                                                      │
//! │       │                                                                 │
//! │       ├── nobody signed in ────────────► UNAUTHENTICATED                │
//! │       ├── cart empty ──────────────────► CART_ERROR                     │
//! │       ├── shipping form invalid ───────► VALIDATION_ERROR               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  copy items + total out of the cart (lock released)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sleep(checkout_delay)       simulated payment processing              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Order { status: pending, total, free shipping }                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart.settle(order.items)  ──────────► Ok(order)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is charged and orders are not persisted. Only the ordered
//! quantities leave the cart, so books added during the delay stay in it.
//! Two concurrent submissions both succeed with the same items; the second
//! finds nothing left to take out.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use bookshelf_core::validation::CheckoutForm;
use bookshelf_core::{CoreError, Order, OrderStatus};

use crate::error::ApiError;
use crate::state::{AuthState, CartState, ConfigState};

/// Country used when the form leaves it blank.
pub const DEFAULT_COUNTRY: &str = "United States";

/// Places an order for everything in the cart.
///
/// ## Errors
/// - `UNAUTHENTICATED` if nobody is signed in
/// - `CART_ERROR` if the cart is empty
/// - `VALIDATION_ERROR` naming the first invalid shipping field
pub async fn place_order(
    auth: &AuthState,
    cart: &CartState,
    config: &ConfigState,
    form: CheckoutForm,
) -> Result<Order, ApiError> {
    debug!(payment_method = ?form.payment_method, "place_order command");

    let user = auth.current_user().ok_or_else(ApiError::unauthenticated)?;

    let (items, total) = cart.with_cart(|c| (c.items().to_vec(), c.total()));
    if items.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    form.validate()?;

    tokio::time::sleep(config.checkout_delay()).await;

    let mut shipping_address = form.shipping_address.clone();
    if shipping_address.country.trim().is_empty() {
        shipping_address.country = DEFAULT_COUNTRY.to_string();
    }

    let order = Order {
        id: Uuid::new_v4().to_string(),
        user_id: user.id,
        items,
        total,
        status: OrderStatus::Pending,
        created_at: Utc::now(),
        shipping_address,
        payment_method: form.payment_method,
        notes: form.trimmed_notes(),
    };

    cart.with_cart_mut(|c| c.settle(&order.items));

    info!(
        order_id = %order.id,
        user_id = %order.user_id,
        total = %config.format_currency(order.total),
        items = order.item_count(),
        "Order placed"
    );

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bookshelf_core::{Catalog, Money, PaymentMethod, ShippingAddress};
    use bookshelf_session::{MemorySessionStore, DEMO_EMAIL, DEMO_PASSWORD};
    use std::sync::Arc;
    use std::time::Duration;

    fn instant_config() -> ConfigState {
        ConfigState {
            checkout_delay_ms: 0,
            ..ConfigState::default()
        }
    }

    fn anonymous() -> AuthState {
        AuthState::restore(Arc::new(MemorySessionStore::new()))
    }

    async fn signed_in() -> AuthState {
        let auth = anonymous();
        auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        auth
    }

    fn cart_with_dune_and_1984() -> CartState {
        let catalog = Catalog::bundled();
        let cart = CartState::new();
        cart.with_cart_mut(|c| {
            c.add(catalog.book(2).unwrap(), 1);
            c.add(catalog.book(10).unwrap(), 1);
        });
        cart
    }

    fn form_for(auth: &AuthState) -> CheckoutForm {
        let mut address = ShippingAddress::prefilled_for(&auth.current_user().unwrap());
        address.phone = "+1 (555) 123-4567".to_string();
        address.address = "123 Main Street".to_string();
        address.city = "Springfield".to_string();
        address.postal_code = "12345".to_string();
        CheckoutForm {
            shipping_address: address,
            payment_method: PaymentMethod::PayPal,
            notes: Some("  Gift wrap please ".to_string()),
        }
    }

    #[tokio::test]
    async fn test_order_matches_cart_and_clears_it() {
        let auth = signed_in().await;
        let cart = cart_with_dune_and_1984();

        let order = place_order(&auth, &cart, &instant_config(), form_for(&auth))
            .await
            .unwrap();

        assert_eq!(order.user_id, "1");
        assert_eq!(order.total, Money::from_cents(2898));
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_method, PaymentMethod::PayPal);
        assert_eq!(order.notes.as_deref(), Some("Gift wrap please"));
        assert_eq!(order.shipping_address.country, "United States");
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_requires_signed_in_user() {
        let auth = anonymous();
        let cart = cart_with_dune_and_1984();
        let form = form_for(&signed_in().await);

        let err = place_order(&auth, &cart, &instant_config(), form)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthenticated);
        assert_eq!(cart.with_cart(|c| c.count()), 2);
    }

    #[tokio::test]
    async fn test_requires_non_empty_cart() {
        let auth = signed_in().await;
        let cart = CartState::new();

        let err = place_order(&auth, &cart, &instant_config(), form_for(&auth))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[tokio::test]
    async fn test_invalid_form_keeps_cart() {
        let auth = signed_in().await;
        let cart = cart_with_dune_and_1984();
        let mut form = form_for(&auth);
        form.shipping_address.city = String::new();

        let err = place_order(&auth, &cart, &instant_config(), form)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "city is required");
        assert!(!cart.with_cart(|c| c.is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_configured_delay() {
        let auth = signed_in().await;
        let cart = cart_with_dune_and_1984();
        let config = ConfigState::default();

        let started = tokio::time::Instant::now();
        place_order(&auth, &cart, &config, form_for(&auth))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_books_added_during_delay_stay_in_cart() {
        let auth = signed_in().await;
        let cart = cart_with_dune_and_1984();
        let config = ConfigState::default();
        let catalog = Catalog::bundled();
        let hobbit = catalog.book(3).unwrap();

        let (order, ()) = tokio::join!(
            place_order(&auth, &cart, &config, form_for(&auth)),
            async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                cart.with_cart_mut(|c| c.add(hobbit, 1));
            }
        );

        let order = order.unwrap();
        assert_eq!(order.item_count(), 2);
        assert!(order.items.iter().all(|i| i.book.id != 3));
        assert_eq!(cart.with_cart(|c| c.count()), 1);
        assert!(cart.with_cart(|c| c.contains(3)));
    }
}
