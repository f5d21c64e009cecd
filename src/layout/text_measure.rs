//! Text measurement and wrapping.
//!
//! Terminal text width depends on Unicode character widths: ASCII is one
//! cell, CJK and most emoji are two, combining marks are zero. Widths come
//! from `unicode-width`; wrapping splits on word boundaries via
//! `unicode-segmentation`.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Measure the display width of a string in terminal cells.
#[inline]
pub fn string_width(s: &str) -> u16 {
    s.width() as u16
}

/// Wrap text to a maximum width, breaking on word boundaries.
///
/// Words wider than the line are hard-broken rather than overflowing.
/// Returns the wrapped lines; an empty string produces no lines.
pub fn wrap_text(text: &str, max_width: u16) -> Vec<String> {
    if text.is_empty() || max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0u16;

    for word in text.split_word_bounds() {
        if word == "\n" {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
            continue;
        }

        let word_width = string_width(word);

        // Whitespace at a line start is swallowed
        if line_width == 0 && word.trim().is_empty() {
            continue;
        }

        if line_width + word_width <= max_width {
            line.push_str(word);
            line_width += word_width;
            continue;
        }

        // Word does not fit on the current line
        if line_width > 0 {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word.trim().is_empty() {
            continue;
        }

        if word_width <= max_width {
            line.push_str(word);
            line_width = word_width;
        } else {
            // Hard-break an overlong word
            for c in word.chars() {
                let cw = string_width(&c.to_string());
                if line_width + cw > max_width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += cw;
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// Number of lines `text` occupies when wrapped to `max_width`.
#[inline]
pub fn measure_text_height(text: &str, max_width: u16) -> u16 {
    wrap_text(text, max_width).len() as u16
}

/// Truncate a string to a maximum display width, appending `…` when cut.
pub fn truncate_text(text: &str, max_width: u16) -> String {
    if string_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0u16;
    for c in text.chars() {
        let cw = string_width(&c.to_string());
        if width + cw > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        width += cw;
    }
    out.push('…');
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii_and_wide() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("世界"), 4);
    }

    #[test]
    fn test_wrap_simple() {
        let lines = wrap_text("the quick brown fox", 10);
        assert_eq!(lines, vec!["the quick ", "brown fox"]);
    }

    #[test]
    fn test_wrap_everything_fits() {
        assert_eq!(wrap_text("short", 20), vec!["short"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn test_wrap_hard_breaks_long_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_swallows_leading_space() {
        let lines = wrap_text("aa bb cc", 2);
        assert_eq!(lines, vec!["aa", "bb", "cc"]);
    }

    #[test]
    fn test_measure_height_matches_wrap() {
        let text = "one two three four five";
        assert_eq!(
            measure_text_height(text, 8) as usize,
            wrap_text(text, 8).len()
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello w…");
        assert_eq!(truncate_text("hi", 0), "");
    }
}
