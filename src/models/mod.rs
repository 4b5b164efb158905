//! Data models
//!
//! In-memory records used by the product report.

mod product;

pub use product::{sample_products, PriceRange, Product, APPAREL, ELECTRONICS};
