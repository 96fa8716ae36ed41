//! Width-aware text helpers shared by the card widgets

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` terminal columns, ending in `…`
///
/// Measures display width rather than chars so CJK and emoji titles never
/// spill past a card edge.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Display width of `text` clamped to `u16`
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("Mango", 10), "Mango");
        assert_eq!(truncate_with_ellipsis("Mango", 5), "Mango");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Summer Mango Sale", 8), "Summer …");
        assert_eq!(truncate_with_ellipsis("Summer Mango Sale", 8).width(), 8);
    }

    #[test]
    fn test_wide_chars_respect_columns() {
        // Each of these is two columns wide
        let truncated = truncate_with_ellipsis("芒果芒果芒果", 6);
        assert!(truncated.width() <= 6);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(truncate_with_ellipsis("Mango", 0), "");
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("★★"), 2);
    }
}
