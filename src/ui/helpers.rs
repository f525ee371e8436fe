//! Text helpers shared by the dashboard widgets.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` display columns, ending in `...` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Compact count: `950`, `1.2k`, `3.4M`.
pub fn format_count(n: i64) -> String {
    let abs = n.unsigned_abs();
    if abs >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if abs >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly ten", 11), "exactly ten");
        assert_eq!(truncate_to_width("a longer title here", 10), "a longe...");
        assert_eq!(truncate_to_width("abcdef", 2), "..");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        let cut = truncate_to_width("日本語のタイトル", 9);
        assert_eq!(cut, "日本語...");
        assert!(cut.width() <= 9);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(1_240), "1.2k");
        assert_eq!(format_count(3_400_000), "3.4M");
        assert_eq!(format_count(-5), "-5");
    }
}
