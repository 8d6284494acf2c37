use serde::{Deserialize, Serialize};

/// Field separator for raw record lines and the row-oriented export.
pub const DELIMITER: char = ';';

/// One product's fields exactly as captured from the source page.
///
/// Created once per product by the acquire stage and consumed exactly once
/// by the normalizer. Nothing is transformed here: the price keeps its
/// currency glyph, the rating stays an English number word, and
/// availability is free text. A field the page didn't have is the empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub availability: String,
}

impl RawRecord {
    /// Render as one `title;price;rating;availability` line.
    pub fn to_line(&self) -> String {
        [
            self.title.as_str(),
            self.price.as_str(),
            self.rating.as_str(),
            self.availability.as_str(),
        ]
        .join(&DELIMITER.to_string())
    }
}
