//! Product model
//!
//! An immutable product record and the price-range bucket derived from it.

use std::fmt;

use serde::Serialize;

use crate::numfmt::format_decimal;

/// Category name used by the electronics filters
pub const ELECTRONICS: &str = "Electronics";
/// Category name for clothing
pub const APPAREL: &str = "Apparel";

/// A product with its price in Thai baht
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    pub fn is_in_category(&self, category: &str) -> bool {
        self.category == category
    }

    /// Price bucket this product falls into
    pub fn price_range(&self) -> PriceRange {
        PriceRange::from_price(self.price)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product(name={}, price={}, category={})",
            self.name,
            format_decimal(self.price),
            self.category
        )
    }
}

/// Price range bucket with fixed thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceRange {
    /// price <= 1,000
    UpToOneThousand,
    /// 1,000 < price < 10,000
    OneThousandToTenThousand,
    /// price >= 10,000
    TenThousandAndAbove,
}

impl PriceRange {
    pub const UPPER_LOW: f64 = 1_000.0;
    pub const LOWER_HIGH: f64 = 10_000.0;

    pub fn from_price(price: f64) -> Self {
        if price <= Self::UPPER_LOW {
            PriceRange::UpToOneThousand
        } else if price < Self::LOWER_HIGH {
            PriceRange::OneThousandToTenThousand
        } else {
            PriceRange::TenThousandAndAbove
        }
    }

    /// Human-readable bucket label
    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::UpToOneThousand => "Price up to 1,000 THB",
            PriceRange::OneThousandToTenThousand => "Price between 1,001 - 9,999 THB",
            PriceRange::TenThousandAndAbove => "Price 10,000 THB and above",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed product list used by the report
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Laptop", 35000.0, ELECTRONICS),
        Product::new("Smartphone", 25000.0, ELECTRONICS),
        Product::new("T-shirt", 450.0, APPAREL),
        Product::new("Monitor", 7500.0, ELECTRONICS),
        Product::new("Keyboard", 499.0, ELECTRONICS),
        Product::new("Jeans", 1200.0, APPAREL),
        Product::new("Headphones", 1800.0, ELECTRONICS),
    ]
}
