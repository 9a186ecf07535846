/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Format a date string to a more readable format
pub fn format_date(date: &str) -> String {
    // Try to parse ISO format and convert to readable
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date) {
        dt.format("%Y-%m-%d").to_string()
    } else if date.len() >= 10 {
        // Fall back to the YYYY-MM-DD prefix (naive timestamps included)
        date.chars().take(10).collect()
    } else {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 8), "Hello...");
        assert_eq!(truncate("Hi", 2), "Hi");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Food Bank Sorter", "bank"));
        assert!(!contains_ignore_case("Food Bank Sorter", "garden"));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-01T10:22:33.123456"), "2026-08-01");
        assert_eq!(format_date("2026-09-01"), "2026-09-01");
        assert_eq!(format_date("soon"), "soon");
    }
}
