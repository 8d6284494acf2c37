use serde::{Deserialize, Serialize};

/// A normalized catalog product.
///
/// Built from exactly one raw record by the normalizer. `price` and
/// `rating` may independently be absent when their raw text could not be
/// parsed; absence is an anomaly recorded in the diagnostics, not a reason
/// to drop the record. `stock_raw` preserves the captured availability
/// text for auditability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Non-empty product title.
    pub title: String,
    /// Decimal price with the currency glyph stripped.
    pub price: Option<f64>,
    /// Star rating in 0..=5, mapped from the capitalized rating word.
    pub rating: Option<u8>,
    /// Availability text as captured from the source page.
    pub stock_raw: String,
    /// Units available if stated; `Some(0)` when explicitly out of stock.
    pub stock_qty: Option<u32>,
    pub stock_status: StockStatus,
}

impl Product {
    /// Fixed column order for the row-oriented export.
    pub const FIELDS: [&'static str; 6] = [
        "title",
        "price",
        "rating",
        "stock_raw",
        "stock_qty",
        "stock_status",
    ];
}

/// Closed availability classification.
///
/// `OutOfStock` always pairs with a quantity of 0; `Unknown` never carries
/// a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    InStock,
    OutOfStock,
    Unknown,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StockStatus::InStock => "IN_STOCK",
            StockStatus::OutOfStock => "OUT_OF_STOCK",
            StockStatus::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            title: "A Light in the Attic".to_string(),
            price: Some(51.77),
            rating: Some(3),
            stock_raw: "In stock (22 available)".to_string(),
            stock_qty: Some(22),
            stock_status: StockStatus::InStock,
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let product = sample_product();
        let json = serde_json::to_string_pretty(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }

    #[test]
    fn test_status_serializes_screaming_snake() {
        let json = serde_json::to_string(&StockStatus::InStock).unwrap();
        assert_eq!(json, "\"IN_STOCK\"");
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"OUT_OF_STOCK\"");
        let json = serde_json::to_string(&StockStatus::Unknown).unwrap();
        assert_eq!(json, "\"UNKNOWN\"");
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let product = Product {
            price: None,
            rating: None,
            stock_qty: None,
            stock_status: StockStatus::Unknown,
            stock_raw: String::new(),
            ..sample_product()
        };
        let json = serde_json::to_string_pretty(&product).unwrap();
        assert!(json.contains("\"price\": null"));
        assert!(json.contains("\"rating\": null"));
        assert!(json.contains("\"stock_qty\": null"));
    }

    #[test]
    fn test_non_ascii_preserved() {
        let product = Product {
            title: "Ménage à Trois — £ edition".to_string(),
            ..sample_product()
        };
        let json = serde_json::to_string_pretty(&product).unwrap();
        assert!(json.contains("Ménage à Trois — £ edition"));
    }
}
