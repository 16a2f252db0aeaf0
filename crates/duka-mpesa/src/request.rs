//! The STK-push request submitted to the gateway.

use crate::error::PaymentError;
use crate::phone::PhoneNumber;
use duka_commerce::cart::{Cart, CartTotals};
use duka_commerce::checkout::Order;
use duka_commerce::ids::ProductId;
use duka_commerce::Money;
use serde::{Deserialize, Serialize};

/// One purchased line, denormalized for gateway-side reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name at purchase time.
    pub name: String,
    /// Quantity purchased.
    pub quantity: i64,
    /// Unit price at purchase time.
    pub unit_price: Money,
}

/// The order-details payload attached to a payment request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderSummary {
    /// Purchased lines.
    pub lines: Vec<OrderLine>,
    /// Delivery fee charged on top of the lines.
    pub delivery_fee: Money,
}

/// A payment request submitted to the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StkPushRequest {
    /// Payer's mobile number.
    pub phone: PhoneNumber,
    /// Amount to charge.
    pub amount: Money,
    /// Caller-generated reference for idempotency and statements.
    pub reference: String,
    /// Order details for gateway-side reconciliation and display.
    pub order: OrderSummary,
}

impl StkPushRequest {
    /// Create a request. The amount must be positive.
    pub fn new(
        phone: PhoneNumber,
        amount: Money,
        reference: impl Into<String>,
    ) -> Result<Self, PaymentError> {
        if !amount.is_positive() {
            return Err(PaymentError::InvalidAmount(amount));
        }
        Ok(Self {
            phone,
            amount,
            reference: reference.into(),
            order: OrderSummary::default(),
        })
    }

    /// Attach an order-details payload.
    pub fn with_order(mut self, order: OrderSummary) -> Self {
        self.order = order;
        self
    }

    /// Build a request for a cart's grand total, with a generated reference.
    pub fn for_cart(
        phone: PhoneNumber,
        cart: &Cart,
        totals: &CartTotals,
    ) -> Result<Self, PaymentError> {
        let order = OrderSummary {
            lines: cart
                .items
                .iter()
                .map(|item| OrderLine {
                    product_id: item.product_id.clone(),
                    name: item.product.name.clone(),
                    quantity: item.quantity,
                    unit_price: item.product.price,
                })
                .collect(),
            delivery_fee: totals.delivery_fee,
        };
        Ok(Self::new(phone, totals.total, Order::generate_reference())?.with_order(order))
    }

    /// Build a request for a placed order, reusing its reference.
    pub fn for_order(phone: PhoneNumber, order: &Order) -> Result<Self, PaymentError> {
        let summary = OrderSummary {
            lines: order
                .items
                .iter()
                .map(|item| OrderLine {
                    product_id: item.product_id.clone(),
                    name: item.product.name.clone(),
                    quantity: item.quantity,
                    unit_price: item.product.price,
                })
                .collect(),
            delivery_fee: order.delivery_fee,
        };
        Ok(Self::new(phone, order.total, order.reference.clone())?.with_order(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duka_commerce::catalog::Product;

    fn phone() -> PhoneNumber {
        PhoneNumber::parse("0712345678").unwrap()
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(matches!(
            StkPushRequest::new(phone(), Money::zero(), "ORDER-1"),
            Err(PaymentError::InvalidAmount(_))
        ));
        assert!(matches!(
            StkPushRequest::new(phone(), Money::new(-10), "ORDER-1"),
            Err(PaymentError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_for_cart_copies_lines_and_fee() {
        let mut cart = Cart::new();
        let pads = Product::new("prod-pads", "Brake Pads", Money::new(850), 12);
        cart.add_item(&pads, 2).unwrap();

        let totals = cart.totals();
        let request = StkPushRequest::for_cart(phone(), &cart, &totals).unwrap();

        assert_eq!(request.amount, totals.total);
        assert_eq!(request.order.delivery_fee, totals.delivery_fee);
        assert_eq!(request.order.lines.len(), 1);
        assert_eq!(request.order.lines[0].name, "Brake Pads");
        assert_eq!(request.order.lines[0].quantity, 2);
        assert!(request.reference.starts_with("ORDER-"));
    }

    #[test]
    fn test_for_empty_cart_is_refused() {
        let cart = Cart::new();
        let totals = cart.totals();
        assert!(matches!(
            StkPushRequest::for_cart(phone(), &cart, &totals),
            Err(PaymentError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_for_order_reuses_reference() {
        let mut cart = Cart::new();
        let pads = Product::new("prod-pads", "Brake Pads", Money::new(8_500), 12);
        cart.add_item(&pads, 1).unwrap();
        let totals = cart.totals();
        let order = Order::place(&cart, &totals);

        let request = StkPushRequest::for_order(phone(), &order).unwrap();
        assert_eq!(request.reference, order.reference);
        assert_eq!(request.amount, Money::new(8_500));
    }
}
