//! # Cart State
//!
//! Holds the shopping cart for the running storefront.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. A presentation host may dispatch commands from several threads
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Presentation Action      Command                 Cart Change           │
//! │  ───────────────────      ───────                 ───────────           │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_to_cart() ───────► add(book, n)         │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_item() ──► set_quantity(id, n)  │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► remove(id)           │
//! │                                                                         │
//! │  Order Placed ───────────► place_order() ───────► clear()              │
//! │                                                                         │
//! │  View Cart ──────────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: The lock is never held across an .await; checkout copies the    │
//! │        items out, sleeps, then locks again to clear.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use bookshelf_core::Cart;

/// Shared handle to the cart. Cloning shares the same cart.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use bookshelf_core::CartTotals;
    /// use bookshelf_storefront::state::CartState;
    ///
    /// let cart_state = CartState::new();
    /// let totals = cart_state.with_cart(|c| CartTotals::from(c));
    /// assert_eq!(totals.item_count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::Catalog;

    #[test]
    fn test_clones_share_the_cart() {
        let catalog = Catalog::bundled();
        let state = CartState::new();
        let other = state.clone();

        state.with_cart_mut(|c| c.add(catalog.book(2).unwrap(), 2));

        assert_eq!(other.with_cart(|c| c.count()), 2);
    }

    #[test]
    fn test_mutation_result_is_returned() {
        let catalog = Catalog::bundled();
        let state = CartState::new();

        let total = state.with_cart_mut(|c| {
            c.add(catalog.book(7).unwrap(), 3);
            c.total()
        });
        assert_eq!(total.cents(), 2997);
    }
}
