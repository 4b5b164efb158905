//! Product report
//!
//! Prints the fixed product list, the Electronics-over-500 totals and the
//! price-range grouping.

use std::io::stdout;

use workshops::models::sample_products;
use workshops::report::{write_report, ReportSummary};
use workshops::{build_info, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init()?;

    build_info::print_startup_banner("product_report");

    let products = sample_products();
    write_report(&mut stdout().lock(), &products)?;

    let summary = ReportSummary::compute(&products);
    if !summary.totals_match() {
        tracing::warn!(
            eager = summary.eager_total,
            lazy = summary.lazy_total,
            "Eager and lazy totals differ"
        );
    }
    let summary_json = serde_json::to_string(&summary)?;
    tracing::debug!(summary = %summary_json, "Report complete");

    Ok(())
}
