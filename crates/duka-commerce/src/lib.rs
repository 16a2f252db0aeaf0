//! Storefront domain types and logic for Autoduka.
//!
//! This crate owns the authoritative shopping-session state for the
//! storefront:
//!
//! - **Catalog**: product snapshots the cart references
//! - **Cart**: line items with additive adds, absolute quantity updates,
//!   and threshold-based delivery pricing
//! - **Checkout**: the order record placed once a cart is paid for
//! - **Config**: store settings (delivery policy, VAT rate)
//!
//! # Example
//!
//! ```rust
//! use duka_commerce::prelude::*;
//!
//! let pads = Product::new("prod-1", "Brembo Brake Pads", Money::new(4_500), 12);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&pads, 2).unwrap();
//!
//! let totals = cart.totals();
//! assert_eq!(totals.subtotal, Money::new(9_000));
//! assert_eq!(totals.delivery_fee, Money::zero()); // free above 5,000 KES
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{DeliveryPolicy, StoreSettings};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    pub use crate::catalog::Product;

    pub use crate::cart::{Cart, CartTotals, LineItem};

    pub use crate::checkout::{Order, OrderStatus};
}
