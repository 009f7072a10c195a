//! Output formatting utilities

/// Truncate a string for fixed-width table columns, appending an ellipsis
///
/// The result never exceeds `max_chars`; widths too small to fit an
/// ellipsis get a plain prefix.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        s.chars().take(max_chars).collect()
    } else {
        let truncated: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", truncated)
    }
}

/// Render a date-less "n day(s)" phrase
pub fn days_phrase(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("Portal", 10), "Portal");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_str("E-Commerce Platform", 10), "E-Comme...");
    }

    #[test]
    fn test_truncate_never_exceeds_width() {
        assert_eq!(truncate_str("Platform", 3), "Pla");
        assert_eq!(truncate_str("Platform", 1), "P");
        assert_eq!(truncate_str("Platform", 0), "");
        for width in 0..12 {
            assert!(truncate_str("E-Commerce Platform", width).chars().count() <= width);
        }
    }

    #[test]
    fn test_days_phrase() {
        assert_eq!(days_phrase(1), "1 day");
        assert_eq!(days_phrase(14), "14 days");
    }
}
