//! Cart and line item types.

use crate::cart::CartTotals;
use crate::catalog::Product;
use crate::config::DeliveryPolicy;
use crate::error::CommerceError;
use crate::ids::{CartId, LineItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Holds at most one line item per product; line order is insertion order.
/// Totals are recomputed on every read, never cached, so they can't go
/// stale between mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a quantity of a product to the cart.
    ///
    /// If a line item for the product already exists its quantity is
    /// incremented; otherwise a new line is appended. Additive, in contrast
    /// to [`Cart::update_quantity`] which sets the quantity absolutely.
    ///
    /// Returns an error if the quantity is not positive or the increment
    /// would overflow. Stock is deliberately not checked here; callers gate
    /// on [`Product::can_fulfill`] where they want to.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: i64,
    ) -> Result<LineItemId, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            self.updated_at = current_timestamp();
            return Ok(existing.id.clone());
        }

        let item = LineItem::new(product, quantity);
        let id = item.id.clone();
        self.items.push(item);
        self.updated_at = current_timestamp();
        Ok(id)
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: &Product) -> Result<LineItemId, CommerceError> {
        self.add_item(product, 1)
    }

    /// Remove a product's line item from the cart.
    ///
    /// Returns whether a line was removed; removing an absent product is a
    /// no-op, not an error.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Set a line item's quantity absolutely.
    ///
    /// A non-positive quantity removes the line entirely. Returns whether a
    /// line item for the product existed.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
            self.updated_at = current_timestamp();
            true
        } else {
            false
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Compute totals under the default delivery policy.
    pub fn totals(&self) -> CartTotals {
        self.totals_with(&DeliveryPolicy::default())
    }

    /// Compute totals under a specific delivery policy.
    ///
    /// Total for all reachable cart states: arithmetic saturates rather
    /// than failing. VAT is not part of the total; callers compute it
    /// separately for display via [`CartTotals::vat_at`].
    pub fn totals_with(&self, policy: &DeliveryPolicy) -> CartTotals {
        let subtotal = self
            .items
            .iter()
            .fold(Money::zero(), |acc, item| acc.saturating_add(item.line_total()));
        let delivery_fee = policy.fee_for(subtotal);
        CartTotals {
            subtotal,
            delivery_fee,
            total: subtotal.saturating_add(delivery_fee),
        }
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of unique products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line item for a product, if present.
    pub fn line(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A line item in the cart: a product snapshot paired with a quantity.
///
/// Quantity is always >= 1; a line reaching zero is removed rather than
/// kept around.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Quantity.
    pub quantity: i64,
    /// Snapshot of the product at the time it was added.
    pub product: Product,
}

impl LineItem {
    /// Create a new line item from a product snapshot.
    pub fn new(product: &Product, quantity: i64) -> Self {
        Self {
            id: LineItemId::generate(),
            product_id: product.id.clone(),
            quantity,
            product: product.clone(),
        }
    }

    /// Price of this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.product.price.saturating_mul(self.quantity)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
