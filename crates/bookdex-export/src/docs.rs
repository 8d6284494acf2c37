use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bookdex_model::Product;

/// Write the batch as a pretty-printed JSON array of six-field objects,
/// in batch order.
///
/// Absent values render as `null`. Output is UTF-8 with non-ASCII text
/// preserved verbatim — nothing is escaped to ASCII-safe sequences. An
/// empty batch produces `[]`.
pub fn write_json(products: &[Product], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(products).context("Failed to serialize products")?;
    fs::write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), records = products.len(), "Wrote JSON export");
    Ok(())
}
