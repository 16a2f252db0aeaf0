//! Derived cart totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals derived from the current cart contents.
///
/// A pure value: computed on demand, never stored as independent mutable
/// state. `total` is always `subtotal + delivery_fee`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Delivery fee under the store's threshold rule.
    pub delivery_fee: Money,
    /// Amount the customer pays.
    pub total: Money,
}

impl CartTotals {
    /// Check if the order qualifies for free delivery.
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_fee.is_zero() && !self.subtotal.is_zero()
    }

    /// VAT contained in the subtotal at the given rate, for receipt display.
    ///
    /// Shown to the customer only; it is never added to `total`.
    pub fn vat_at(&self, rate_percent: f64) -> Money {
        self.subtotal.percentage(rate_percent)
    }
}
