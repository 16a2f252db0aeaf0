//! Product catalog types.
//!
//! The cart only needs a read-only snapshot of each product; catalog
//! management (creation, editing, media) belongs to the back-office.

mod product;

pub use product::Product;
