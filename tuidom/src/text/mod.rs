use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    // Leave one cell for the ellipsis.
    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Fit `s` into exactly `width` cells: truncate when too long, pad per `align`.
pub fn pad_to_width(s: &str, width: usize, align: TextAlign) -> String {
    let fitted = truncate_to_width(s, width);
    let used = display_width(&fitted);
    let left = align_offset(used, width, align);
    let right = width.saturating_sub(used + left);

    let mut out = String::with_capacity(fitted.len() + left + right);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(&fitted);
    out.extend(std::iter::repeat_n(' ', right));
    out
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}
