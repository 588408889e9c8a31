//! Lenient integer parsing for report cells.
//!
//! Report cells are hand-typed: thousands separators, blanks and markers
//! like `N/A` all occur. These parsers only report failure; the extractor
//! stores a failed cell as zero and keeps the row.

/// Parse a count column, removing thousands separators first.
pub fn parse_count(text: &str) -> Option<i64> {
    text.replace(',', "").parse().ok()
}

/// Parse a column as-is. Used for unit ids, success percentage and
/// recreation days, which are not comma-stripped.
pub fn parse_plain(text: &str) -> Option<i64> {
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_strips_thousands_separators() {
        assert_eq!(parse_count("1,034"), Some(1034));
        assert_eq!(parse_count("12,345,678"), Some(12_345_678));
        assert_eq!(parse_count("88"), Some(88));
    }

    #[test]
    fn test_plain_keeps_commas_significant() {
        assert_eq!(parse_plain("1,034"), None);
        assert_eq!(parse_plain("51"), Some(51));
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(parse_count("N/A"), None);
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_plain(" 4"), None);
        assert_eq!(parse_plain("*"), None);
    }

    #[test]
    fn test_signed_values_parse() {
        assert_eq!(parse_plain("+7"), Some(7));
        assert_eq!(parse_plain("-3"), Some(-3));
    }
}
