use tuidom::text::{align_offset, char_width, display_width, pad_to_width, truncate_to_width};
use tuidom::TextAlign;

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_wide_chars() {
    assert_eq!(display_width("日本"), 4);
    assert_eq!(display_width("a日b"), 4);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate() {
    assert_eq!(truncate_to_width("hello", 5), "hello");
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_pad_to_width_alignments() {
    assert_eq!(pad_to_width("ab", 6, TextAlign::Left), "ab    ");
    assert_eq!(pad_to_width("ab", 6, TextAlign::Right), "    ab");
    assert_eq!(pad_to_width("ab", 6, TextAlign::Center), "  ab  ");
}

#[test]
fn test_pad_to_width_truncates_overflow() {
    let padded = pad_to_width("Lovelace", 5, TextAlign::Left);
    assert_eq!(padded, "Love…");
    assert_eq!(display_width(&padded), 5);
}

#[test]
fn test_align_offset_when_text_overflows() {
    assert_eq!(align_offset(10, 4, TextAlign::Right), 0);
    assert_eq!(align_offset(2, 4, TextAlign::Right), 2);
}
