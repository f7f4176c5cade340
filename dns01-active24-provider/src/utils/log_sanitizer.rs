//! Log sanitization utilities
//!
//! Response bodies are logged at debug level; this keeps them bounded.

/// Maximum number of bytes of a payload included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for logging.
///
/// Returns the original string if it fits in `TRUNCATE_LIMIT` bytes,
/// otherwise the longest prefix ending on a char boundary, followed by the
/// total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let end = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = r#"{"data":[]}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"a".repeat(TRUNCATE_LIMIT)));
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
    }

    #[test]
    fn multibyte_chars_safe() {
        // 'č' is 2 bytes, 'ř' is 2 bytes: the cut must not split either
        let s = "čř".repeat(100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total 400 bytes]"));
        assert!(result.starts_with(&"čř".repeat(64)));
    }
}
