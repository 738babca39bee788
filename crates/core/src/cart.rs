//! The in-memory shopping cart.
//!
//! A [`Cart`] is the single source of truth for what one shopper intends to
//! buy right now. Lines are unique by product id and keep insertion order
//! for display; totals are always derived, never stored.
//!
//! Every operation here is synchronous and infallible. Anything that can
//! fail (resolving a product, stock gating, authentication) happens before
//! the cart is touched.

use serde::{Deserialize, Serialize};

use crate::types::{Money, Product, ProductId};

/// One product entry in a cart.
///
/// Invariant: `quantity >= 1`. A line that would drop to zero is removed
/// from the cart instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price×quantity for this line.
    #[must_use]
    pub fn total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// A shopper's cart: an ordered sequence of lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// If a line with the same product id exists its quantity increments by
    /// one (the stored product snapshot is left as first seen); otherwise a
    /// new line with quantity 1 is appended. Always succeeds.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Remove the line with this product id. No-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero removes the line, matching what the shopper means
    /// by "none of these". Updating an id that is not in the cart does
    /// nothing; it never inserts.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) {
            line.quantity = quantity;
        }
    }

    /// Σ price×quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Σ quantity over all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for a product id, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every line unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
