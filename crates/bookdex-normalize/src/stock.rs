use bookdex_model::StockStatus;
use regex::Regex;

/// Normalize raw availability text into `(quantity, status)`.
///
/// Matching is case-insensitive on substrings, in fixed priority order:
/// `"in stock"` is checked before `"out of stock"`, and anything else is
/// [`StockStatus::Unknown`]. An in-stock quantity is taken from a
/// `(<n> available)` suffix when present; out of stock always means a
/// quantity of 0.
pub fn parse_stock(raw: &str) -> (Option<u32>, StockStatus) {
    let text = raw.trim();
    if text.is_empty() {
        return (None, StockStatus::Unknown);
    }

    let lower = text.to_lowercase();

    if lower.contains("in stock") {
        let re = Regex::new(r"\((\d+)\s+available\)").unwrap();
        let qty = re.captures(&lower).and_then(|c| c[1].parse::<u32>().ok());
        return (qty, StockStatus::InStock);
    }

    if lower.contains("out of stock") {
        return (Some(0), StockStatus::OutOfStock);
    }

    (None, StockStatus::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_stock_with_quantity() {
        assert_eq!(
            parse_stock("In stock (22 available)"),
            (Some(22), StockStatus::InStock)
        );
    }

    #[test]
    fn test_in_stock_without_quantity() {
        assert_eq!(parse_stock("In stock"), (None, StockStatus::InStock));
    }

    #[test]
    fn test_out_of_stock() {
        assert_eq!(parse_stock("Out of stock"), (Some(0), StockStatus::OutOfStock));
    }

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!(parse_stock(""), (None, StockStatus::Unknown));
        assert_eq!(parse_stock("   "), (None, StockStatus::Unknown));
    }

    #[test]
    fn test_unrecognized_is_unknown() {
        assert_eq!(parse_stock("weird text"), (None, StockStatus::Unknown));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            parse_stock("IN STOCK (3 AVAILABLE)"),
            (Some(3), StockStatus::InStock)
        );
        assert_eq!(parse_stock("OUT OF STOCK"), (Some(0), StockStatus::OutOfStock));
    }

    #[test]
    fn test_in_stock_wins_over_out_of_stock() {
        // Fixed priority: "in stock" is checked first.
        assert_eq!(
            parse_stock("back in stock soon, was out of stock"),
            (None, StockStatus::InStock)
        );
    }

    #[test]
    fn test_malformed_quantity_suffix() {
        assert_eq!(
            parse_stock("In stock (soon available)"),
            (None, StockStatus::InStock)
        );
    }
}
