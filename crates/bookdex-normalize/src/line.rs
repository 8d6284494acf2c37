use bookdex_model::{Product, DELIMITER};

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::{price, rating, stock};

/// Assemble one raw `title;price;rating;stock` line into a [`Product`].
///
/// `line_no` is 1-based and only used for diagnostics. Returns `None` for
/// blank lines (silently) and for structural rejects (with a diagnostic):
/// a split that doesn't yield exactly four fields, or an empty title.
/// Unparseable price or rating text is an anomaly, not a reject — the
/// diagnostic is emitted and the record is still produced with that field
/// absent.
pub fn assemble(line: &str, line_no: usize, diag: &mut dyn DiagnosticSink) -> Option<Product> {
    let raw = line.trim_end_matches(['\r', '\n']);
    if raw.trim().is_empty() {
        return None;
    }

    let parts: Vec<&str> = raw.split(DELIMITER).collect();
    if parts.len() != 4 {
        diag.emit(Diagnostic::FieldCount {
            line_no,
            found: parts.len(),
            raw: raw.to_string(),
        });
        return None;
    }

    let title = parts[0].trim();
    let price_raw = parts[1].trim();
    let rating_raw = parts[2].trim();
    let stock_raw = parts[3].trim();

    if title.is_empty() {
        diag.emit(Diagnostic::EmptyTitle {
            line_no,
            raw: raw.to_string(),
        });
        return None;
    }

    let price = price::parse_price(price_raw);
    if price.is_none() && !price_raw.is_empty() {
        diag.emit(Diagnostic::BadPrice {
            line_no,
            value: price_raw.to_string(),
        });
    }

    let rating = rating::parse_rating(rating_raw);
    if rating.is_none() && !rating_raw.is_empty() {
        diag.emit(Diagnostic::UnknownRating {
            line_no,
            value: rating_raw.to_string(),
        });
    }

    let (stock_qty, stock_status) = stock::parse_stock(stock_raw);

    Some(Product {
        title: title.to_string(),
        price,
        rating,
        stock_raw: stock_raw.to_string(),
        stock_qty,
        stock_status,
    })
}
