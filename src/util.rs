//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Safely truncate a string to at most `max_bytes` while respecting UTF-8 boundaries.
///
/// If the string is already shorter than `max_bytes`, returns it unchanged.
/// Otherwise, finds the last valid UTF-8 character boundary at or before `max_bytes`
/// and returns a slice up to that point.
///
/// # Examples
///
/// ```
/// use folio::util::truncate_utf8_safe;
///
/// assert_eq!(truncate_utf8_safe("hello world", 5), "hello");
///
/// // "cafe\u{0301}" is "café" where the accent is a combining character
/// let s = "cafe\u{0301}";  // 6 bytes total
/// let truncated = truncate_utf8_safe(s, 5);
/// assert!(truncated.len() <= 5);
/// assert!(truncated.is_char_boundary(truncated.len()));
/// ```
pub fn truncate_utf8_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Fit a string into at most `max_cols` terminal columns, replacing the
/// tail with an ellipsis when it does not fit. Wide characters count by
/// their display width, not their byte length.
pub fn fit_width(s: &str, max_cols: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_cols {
        return s.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }
    let budget = max_cols - 1;
    let mut out = String::new();
    let mut cols = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if cols + w > budget {
            break;
        }
        out.push(ch);
        cols += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate_utf8_safe("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_at_ascii_boundary() {
        assert_eq!(truncate_utf8_safe("hello world", 5), "hello");
    }

    #[test]
    fn test_truncate_at_utf8_boundary() {
        // Each character is 3 bytes, 9 bytes total
        let s = "日本語";
        assert_eq!(truncate_utf8_safe(s, 4), "日");
        assert_eq!(truncate_utf8_safe(s, 6), "日本");
    }

    #[test]
    fn test_truncate_empty_string() {
        assert_eq!(truncate_utf8_safe("", 5), "");
    }

    #[test]
    fn test_truncate_to_zero() {
        assert_eq!(truncate_utf8_safe("hello", 0), "");
    }

    #[test]
    fn test_fit_width_passthrough() {
        assert_eq!(fit_width("hello", 5), "hello");
        assert_eq!(fit_width("hello", 10), "hello");
    }

    #[test]
    fn test_fit_width_adds_ellipsis() {
        assert_eq!(fit_width("hello world", 6), "hello…");
    }

    #[test]
    fn test_fit_width_counts_display_columns() {
        // Each ideograph is 2 columns wide
        assert_eq!(fit_width("日本語", 6), "日本語");
        assert_eq!(fit_width("日本語", 5), "日本…");
        assert_eq!(fit_width("日本語", 4), "日…");
    }

    #[test]
    fn test_fit_width_zero() {
        assert_eq!(fit_width("hello", 0), "");
    }
}
