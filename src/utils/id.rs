//! Path identifier parsing.

/// Parses a path segment as a primary key.
///
/// Path ids are opaque: a segment that is not a valid `i64` can never match a
/// row, so callers treat `None` as "not found" rather than a malformed request.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("-1"), Some(-1));
    }

    #[test]
    fn test_parse_non_numeric_id() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("1.5"), None);
        assert_eq!(parse_id("99999999999999999999"), None);
    }
}
