/// Currency glyphs stripped before the decimal parse.
///
/// Extend this list if the source ever carries other currencies; any glyph
/// not listed fails the parse and the price comes back absent.
const CURRENCY_GLYPHS: &[char] = &['£', '$'];

/// Parse raw price text like `"£51.77"` or `"51.77"` into a decimal.
///
/// Trims whitespace, strips known currency glyphs, then attempts the
/// parse. Empty input and anything that still doesn't parse yield `None` —
/// this function never fails.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(CURRENCY_GLYPHS, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
