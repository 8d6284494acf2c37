/// Map a capitalized English rating word to its star count.
///
/// The mapping is closed and case-sensitive: `"Zero"` through `"Five"`.
/// Unknown or empty words come back absent — they are tolerated, not
/// errors. "Zero" doesn't appear on real pages but is accepted anyway.
pub fn parse_rating(raw: &str) -> Option<u8> {
    match raw.trim() {
        "Zero" => Some(0),
        "One" => Some(1),
        "Two" => Some(2),
        "Three" => Some(3),
        "Four" => Some(4),
        "Five" => Some(5),
        _ => None,
    }
}
