//! Order types.

use crate::cart::{Cart, CartTotals, LineItem};
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, payment not yet confirmed.
    #[default]
    Pending,
    /// Payment initiated, awaiting confirmation.
    Processing,
    /// Paid and confirmed.
    Completed,
    /// Payment failed or was abandoned.
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Failed => "failed",
        }
    }

    /// Check if the order has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Failed)
    }
}

/// An order placed from a cart.
///
/// Snapshots the cart's line items and totals at placement time so later
/// cart mutations (or a post-checkout `clear`) don't disturb the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable reference passed to the payment gateway.
    pub reference: String,
    /// Items at placement time.
    pub items: Vec<LineItem>,
    /// Subtotal at placement time.
    pub subtotal: Money,
    /// Delivery fee at placement time.
    pub delivery_fee: Money,
    /// Amount charged.
    pub total: Money,
    /// Order status.
    pub status: OrderStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Order {
    /// Place an order from a cart and its computed totals.
    pub fn place(cart: &Cart, totals: &CartTotals) -> Self {
        let now = current_timestamp();
        Self {
            id: OrderId::generate(),
            reference: Self::generate_reference(),
            items: cart.items.clone(),
            subtotal: totals.subtotal,
            delivery_fee: totals.delivery_fee,
            total: totals.total,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Generate a payment reference (e.g., "ORDER-1722760000000").
    pub fn generate_reference() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        format!("ORDER-{}", millis)
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Mark the payment as initiated.
    pub fn mark_processing(&mut self) {
        self.status = OrderStatus::Processing;
        self.updated_at = current_timestamp();
    }

    /// Mark the order paid and complete.
    pub fn mark_completed(&mut self) {
        self.status = OrderStatus::Completed;
        self.updated_at = current_timestamp();
    }

    /// Mark the order failed.
    pub fn mark_failed(&mut self) {
        self.status = OrderStatus::Failed;
        self.updated_at = current_timestamp();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn cart_with_items() -> Cart {
        let mut cart = Cart::new();
        let pads = Product::new("prod-pads", "Brake Pads", Money::new(4_500), 12);
        let plugs = Product::new("prod-plugs", "Spark Plugs", Money::new(450), 40);
        cart.add_item(&pads, 1).unwrap();
        cart.add_item(&plugs, 4).unwrap();
        cart
    }

    #[test]
    fn test_place_snapshots_cart() {
        let mut cart = cart_with_items();
        let totals = cart.totals();
        let order = Order::place(&cart, &totals);

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 5);
        assert_eq!(order.subtotal, totals.subtotal);
        assert_eq!(order.total, totals.total);
        assert!(order.reference.starts_with("ORDER-"));

        // A post-checkout clear leaves the order untouched
        cart.clear();
        assert_eq!(order.item_count(), 5);
    }

    #[test]
    fn test_status_transitions() {
        let cart = cart_with_items();
        let totals = cart.totals();
        let mut order = Order::place(&cart, &totals);

        order.mark_processing();
        assert_eq!(order.status, OrderStatus::Processing);
        assert!(!order.status.is_terminal());

        order.mark_completed();
        assert_eq!(order.status, OrderStatus::Completed);
        assert!(order.status.is_terminal());
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(OrderStatus::Pending.as_str(), "pending");
        assert_eq!(OrderStatus::Failed.as_str(), "failed");
    }
}
