//! Product aggregations
//!
//! The electronics-over-500 total is computed two ways: an eager pipeline that
//! materialises every intermediate list, and a lazy iterator chain. Both add
//! the same prices in the same order, so their results are bit-identical.

use serde::Serialize;

use crate::models::{PriceRange, Product, ELECTRONICS};

/// Price a product must exceed to be counted
pub const PRICE_THRESHOLD: f64 = 500.0;

fn is_electronics_over_500(product: &Product) -> bool {
    product.is_in_category(ELECTRONICS) && product.price > PRICE_THRESHOLD
}

/// Sum of prices of Electronics products priced over 500
pub fn calculate_total_electronics_price_over_500(products: &[Product]) -> f64 {
    products
        .iter()
        .filter(|p| is_electronics_over_500(p))
        .map(|p| p.price)
        .fold(0.0, |acc, price| acc + price)
}

/// Number of Electronics products priced over 500
pub fn count_electronics_over_500(products: &[Product]) -> usize {
    products.iter().filter(|p| is_electronics_over_500(p)).count()
}

// Totals fold from +0.0 so an empty selection is 0.0, never -0.0.

/// Eager strategy: each stage is collected before the next one runs
pub fn total_electronics_price_over_500_eager(products: &[Product]) -> f64 {
    let electronics: Vec<&Product> = products
        .iter()
        .filter(|p| p.is_in_category(ELECTRONICS))
        .collect();
    let over_threshold: Vec<&Product> = electronics
        .into_iter()
        .filter(|p| p.price > PRICE_THRESHOLD)
        .collect();
    let prices: Vec<f64> = over_threshold.into_iter().map(|p| p.price).collect();
    prices.iter().fold(0.0, |acc, price| acc + price)
}

/// Lazy strategy: one element at a time through the whole chain
pub fn total_electronics_price_over_500_lazy(products: &[Product]) -> f64 {
    products
        .iter()
        .filter(|p| p.is_in_category(ELECTRONICS))
        .filter(|p| p.price > PRICE_THRESHOLD)
        .map(|p| p.price)
        .fold(0.0, |acc, price| acc + price)
}

/// Products sharing a price range, in original list order
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBucket<'a> {
    pub range: PriceRange,
    pub products: Vec<&'a Product>,
}

/// Partition products by price range
///
/// Buckets come out in order of first appearance of their range.
pub fn group_by_price_range(products: &[Product]) -> Vec<PriceBucket<'_>> {
    let mut buckets: Vec<PriceBucket<'_>> = Vec::new();

    for product in products {
        let range = product.price_range();
        match buckets.iter_mut().find(|b| b.range == range) {
            Some(bucket) => bucket.products.push(product),
            None => buckets.push(PriceBucket {
                range,
                products: vec![product],
            }),
        }
    }

    buckets
}

/// Bucket size entry in the summary
#[derive(Debug, Clone, Serialize)]
pub struct BucketSize {
    pub range: PriceRange,
    pub count: usize,
}

/// Machine-readable digest of a report run
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub product_count: usize,
    pub electronics_over_500_count: usize,
    pub eager_total: f64,
    pub lazy_total: f64,
    pub buckets: Vec<BucketSize>,
}

impl ReportSummary {
    pub fn compute(products: &[Product]) -> Self {
        Self {
            product_count: products.len(),
            electronics_over_500_count: count_electronics_over_500(products),
            eager_total: total_electronics_price_over_500_eager(products),
            lazy_total: total_electronics_price_over_500_lazy(products),
            buckets: group_by_price_range(products)
                .iter()
                .map(|b| BucketSize {
                    range: b.range,
                    count: b.products.len(),
                })
                .collect(),
        }
    }

    /// True when both strategies produced the same bits
    pub fn totals_match(&self) -> bool {
        self.eager_total.to_bits() == self.lazy_total.to_bits()
    }
}
