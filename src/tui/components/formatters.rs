// Shared formatting helpers for table cells

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fit `text` into `width` display columns, ending with `…` when cut
///
/// Uses unicode display width (not byte length) so CJK and emoji names
/// line up with their column.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    // Leave room for the ellipsis
    let target_width = width - 1;
    let mut current_width = 0;
    let mut truncate_at = 0;
    for (i, c) in text.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        truncate_at = i + c.len_utf8();
    }

    let mut out = text[..truncate_at].to_string();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Azman", 10), "Azman");
        assert_eq!(truncate_to_width("Azman", 5), "Azman");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("Rijwan Hossain", 8), "Rijwan …");
        assert_eq!(truncate_to_width("Rijwan Hossain", 8).width(), 8);
    }

    #[test]
    fn wide_chars_count_double() {
        // Each CJK char is two columns; only one fits beside the ellipsis
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(truncate_to_width("Azman", 0), "");
    }
}
