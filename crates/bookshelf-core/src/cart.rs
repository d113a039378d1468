//! # Cart Aggregator
//!
//! Maintains the mapping from book identifier to quantity and derives totals.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Operation               Cart Change           │
//! │  ───────────              ─────────               ───────────           │
//! │                                                                         │
//! │  "Add to Cart" ─────────► add(book, n) ─────────► qty += n / push       │
//! │                                                                         │
//! │  Change Quantity ───────► set_quantity(id, n) ──► qty = n               │
//! │                                                  (n <= 0 ⇒ remove)      │
//! │                                                                         │
//! │  Click Remove ──────────► remove(id) ───────────► entry dropped         │
//! │                                                                         │
//! │  Order Placed ──────────► clear() ──────────────► items.clear()         │
//! │                                                                         │
//! │  Summary Box ───────────► total() / count() ────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is not part of the persisted session: it starts empty on every
//! process start.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Book;

/// An entry in the cart.
///
/// ## Design Notes
/// The book is stored as a snapshot so the cart and the orders built from it
/// render without going back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub book: Book,

    /// Always >= 1 while the item is in a cart.
    pub quantity: u32,
}

impl CartItem {
    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.book.price * self.quantity
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - One entry per distinct book id (adding the same book increases quantity)
/// - Quantity is never zero (setting it to zero or below removes the entry)
/// - Entries keep insertion order
/// - No upper bound against stock
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds `quantity` copies of a book, accumulating if already present.
    ///
    /// A zero quantity is ignored so the cart never holds an empty entry.
    pub fn add(&mut self, book: &Book, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.book.id == book.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartItem {
            book: book.clone(),
            quantity,
        });
    }

    /// Removes a book from the cart. No-op if absent.
    pub fn remove(&mut self, book_id: u32) {
        self.items.retain(|i| i.book.id != book_id);
    }

    /// Replaces the quantity of a book already in the cart.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove`]
    /// - Book not in cart: no-op
    pub fn set_quantity(&mut self, book_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove(book_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.book.id == book_id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Takes the quantities of `ordered` out of the cart, dropping entries
    /// that reach zero. Books added after `ordered` was copied stay.
    pub fn settle(&mut self, ordered: &[CartItem]) {
        for placed in ordered {
            if let Some(item) = self.items.iter_mut().find(|i| i.book.id == placed.book.id) {
                item.quantity = item.quantity.saturating_sub(placed.quantity);
            }
        }
        self.items.retain(|i| i.quantity > 0);
    }

    /// Sum over entries of price × quantity.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum over entries of quantity.
    ///
    /// Entries may each hold up to `u32::MAX`, so the sum is widened.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct books in the cart.
    pub fn distinct_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, book_id: u32) -> bool {
        self.items.iter().any(|i| i.book.id == book_id)
    }

    /// Quantity of a book in the cart, zero if absent.
    pub fn quantity_of(&self, book_id: u32) -> u32 {
        self.items
            .iter()
            .find(|i| i.book.id == book_id)
            .map_or(0, |i| i.quantity)
    }
}

/// Cart summary shown next to the cart and on checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub distinct_items: usize,
    #[ts(type = "number")]
    pub item_count: u64,
    pub subtotal: Money,
    /// Shipping is always free.
    pub shipping: Money,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let subtotal = cart.total();
        let shipping = Money::zero();
        CartTotals {
            distinct_items: cart.distinct_items(),
            item_count: cart.count(),
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}
