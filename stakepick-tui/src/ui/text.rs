//! Width-aware text helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate `s` to at most `max_width` terminal columns, ending with an
/// ellipsis when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1; // room for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if used + w > target {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Right-align `s` within `width` columns by left-padding with spaces.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - w), s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_to_width("Kraken", 10), "Kraken");
        assert_eq!(truncate_to_width("Kraken", 6), "Kraken");
    }

    #[test]
    fn truncate_ends_with_ellipsis() {
        assert_eq!(truncate_to_width("Coinbase Custody", 9), "Coinbase…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn truncate_counts_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(truncate_to_width("日本語", 5), "日本…");
    }

    #[test]
    fn pad_left_right_aligns() {
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(pad_left("123456", 5), "123456");
    }
}
