//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                        │
//! │                   update_item       (checkout.rs)                      │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use bookshelf_core::{Cart, CartItem, CartTotals, Catalog};

use crate::error::ApiError;
use crate::state::CartState;

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a book to the cart.
///
/// ## Behavior
/// - If the book is already in the cart: quantity increases
/// - If not: added as a new entry with a snapshot of the book
/// - Stock is not checked
///
/// ## Arguments
/// * `book_id` - Catalog id of the book
/// * `quantity` - Copies to add (default: 1)
///
/// ## Errors
/// `NOT_FOUND` if the book is not in the catalog.
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &CartState,
    book_id: u32,
    quantity: Option<u32>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(book_id, quantity, "add_to_cart command");

    let book = catalog.book(book_id)?;

    Ok(cart.with_cart_mut(|c| {
        c.add(book, quantity);
        CartResponse::from(&*c)
    }))
}

/// Updates the quantity of a book in the cart.
///
/// ## Behavior
/// - Quantity 0 or below: removes the entry
/// - Book not in cart: nothing changes
pub fn update_cart_item(cart: &CartState, book_id: u32, quantity: i64) -> CartResponse {
    debug!(book_id, quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.set_quantity(book_id, quantity);
        CartResponse::from(&*c)
    })
}

/// Removes a book from the cart.
pub fn remove_from_cart(cart: &CartState, book_id: u32) -> CartResponse {
    debug!(book_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove(book_id);
        CartResponse::from(&*c)
    })
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bookshelf_core::Money;

    #[test]
    fn test_add_accumulates() {
        let catalog = Catalog::bundled();
        let cart = CartState::new();

        add_to_cart(&catalog, &cart, 2, None).unwrap();
        let response = add_to_cart(&catalog, &cart, 2, Some(2)).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 3);
        assert_eq!(response.totals.item_count, 3);
    }

    #[test]
    fn test_add_unknown_book() {
        let catalog = Catalog::bundled();
        let cart = CartState::new();

        let err = add_to_cart(&catalog, &cart, 404, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_cart(&cart).totals.item_count, 0);
    }

    #[test]
    fn test_dune_and_1984() {
        let catalog = Catalog::bundled();
        let cart = CartState::new();

        add_to_cart(&catalog, &cart, 2, None).unwrap();
        add_to_cart(&catalog, &cart, 10, None).unwrap();

        let totals = get_cart(&cart).totals;
        assert_eq!(totals.subtotal, Money::from_cents(2898));
        assert_eq!(totals.total, Money::from_cents(2898));
        assert_eq!(totals.item_count, 2);
    }

    #[test]
    fn test_update_to_zero_removes() {
        let catalog = Catalog::bundled();
        let cart = CartState::new();
        add_to_cart(&catalog, &cart, 2, Some(1)).unwrap();
        add_to_cart(&catalog, &cart, 3, Some(2)).unwrap();

        let response = update_cart_item(&cart, 2, 0);

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.totals.item_count, 2);
    }

    #[test]
    fn test_remove_and_clear() {
        let catalog = Catalog::bundled();
        let cart = CartState::new();
        add_to_cart(&catalog, &cart, 1, None).unwrap();
        add_to_cart(&catalog, &cart, 4, None).unwrap();

        assert_eq!(remove_from_cart(&cart, 1).items.len(), 1);
        assert_eq!(remove_from_cart(&cart, 1).items.len(), 1);
        assert!(clear_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_huge_quantities_keep_cart_usable() {
        let catalog = Catalog::bundled();
        let cart = CartState::new();

        add_to_cart(&catalog, &cart, 1, Some(u32::MAX)).unwrap();
        let response = add_to_cart(&catalog, &cart, 2, Some(1)).unwrap();
        assert_eq!(response.totals.item_count, u64::from(u32::MAX) + 1);

        let again = get_cart(&cart);
        assert_eq!(again.items.len(), 2);
        assert_eq!(again.totals.item_count, u64::from(u32::MAX) + 1);
    }
}
