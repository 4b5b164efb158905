//! Report rendering
//!
//! Writes the product report as plain text to any writer.

use std::io::{self, Write};

use super::products::{
    group_by_price_range, total_electronics_price_over_500_eager,
    total_electronics_price_over_500_lazy,
};
use crate::models::Product;
use crate::numfmt::{format_decimal, format_thousands};

const SEPARATOR: &str = "--------------------------------------------------";

/// Write the full product report
pub fn write_report<W: Write>(out: &mut W, products: &[Product]) -> io::Result<()> {
    writeln!(out, "All products:")?;
    for product in products {
        writeln!(out, "{}", product)?;
    }
    writeln!(out, "{}", SEPARATOR)?;

    let eager_total = total_electronics_price_over_500_eager(products);
    writeln!(out, "Method 1: eager list pipeline")?;
    writeln!(
        out,
        "Total price of Electronics over 500 THB: {} THB",
        format_decimal(eager_total)
    )?;
    writeln!(out, "{}", SEPARATOR)?;

    let lazy_total = total_electronics_price_over_500_lazy(products);
    writeln!(out, "Method 2: lazy iterator pipeline")?;
    writeln!(
        out,
        "Total price of Electronics over 500 THB: {} THB",
        format_decimal(lazy_total)
    )?;
    writeln!(out, "{}", SEPARATOR)?;

    writeln!(out, "Products grouped by price range:")?;
    for bucket in group_by_price_range(products) {
        writeln!(out, "{}:", bucket.range.label())?;
        for product in &bucket.products {
            writeln!(out, "  - {}: {} THB", product.name, format_thousands(product.price))?;
        }
        writeln!(out)?;
    }

    out.flush()
}
