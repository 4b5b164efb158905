//! Product report module
//!
//! Filtering, aggregation and price-range grouping over product lists, and
//! the text rendering used by the `product_report` binary.

pub mod products;
pub mod render;

pub use products::{
    calculate_total_electronics_price_over_500, count_electronics_over_500,
    group_by_price_range, total_electronics_price_over_500_eager,
    total_electronics_price_over_500_lazy, PriceBucket, ReportSummary,
};
pub use render::write_report;
