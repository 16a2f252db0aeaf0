//! Product snapshot types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as the storefront sees it.
///
/// Read-only to the cart: the ledger snapshots these fields into line items
/// and never mutates them. Stock is exposed as data for callers to display
/// or gate on; the cart itself does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Manufacturer brand (e.g., "Bosch", "NGK").
    pub brand: String,
    /// Category name (e.g., "Brakes", "Ignition").
    pub category: String,
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Unit price.
    pub price: Money,
    /// Units available.
    pub stock: i64,
    /// Average customer rating, if any.
    pub rating: Option<f32>,
    /// Image URLs, first is the main image.
    pub image_urls: Vec<String>,
}

impl Product {
    /// Create a product snapshot with the fields the cart cares about.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        stock: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            brand: String::new(),
            category: String::new(),
            sku: None,
            price,
            stock,
            rating: None,
            image_urls: Vec::new(),
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Check if any stock is available.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if a specific quantity is available.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }

    /// Main image URL, if any.
    pub fn main_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}
