use std::path::Path;

use anyhow::{Context, Result};
use bookdex_model::{Product, DELIMITER};

/// Write the batch as delimited rows: one header row, then one row per
/// product in batch order, columns
/// `title;price;rating;stock_raw;stock_qty;stock_status`.
///
/// The delimiter matches the raw input format. Absent values render as
/// empty cells. An empty batch produces a header-only file, not an error.
pub fn write_csv(products: &[Product], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER as u8)
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    // Written explicitly so an empty batch still gets its header.
    writer
        .write_record(Product::FIELDS)
        .context("Failed to write CSV header")?;

    for product in products {
        writer
            .serialize(product)
            .with_context(|| format!("Failed to write row for {:?}", product.title))?;
    }
    writer.flush().context("Failed to flush CSV output")?;

    tracing::info!(path = %path.display(), rows = products.len(), "Wrote CSV export");
    Ok(())
}
