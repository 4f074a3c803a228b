use tuidom::render::render;
use tuidom::{render_lines, Border, Display, Element, InlineStyle, Size, Style, Tag, TextAlign};

// ============================================================================
// Rows
// ============================================================================

#[test]
fn test_row_splits_fixed_and_auto_widths() {
    let root = Element::row()
        .child(Element::text("abc").width(Size::Fixed(5)))
        .child(Element::text("rest"));

    let lines = render_lines(&root, 20);
    assert_eq!(lines, vec!["abc   rest"]);
}

#[test]
fn test_percent_width() {
    let root = Element::row()
        .child(Element::text("L").width(Size::Percent(50.0)))
        .child(Element::text("R"));

    // 11 columns minus one gap leaves 10; half goes to the first child.
    let lines = render_lines(&root, 11);
    assert_eq!(lines, vec!["L     R"]);
}

#[test]
fn test_every_line_has_exact_width() {
    let root = Element::col()
        .child(Element::text("short"))
        .child(Element::row().child(Element::text("a")).child(Element::text("b")));

    for line in render(&root, 17) {
        assert_eq!(line.width(), 17);
    }
}

#[test]
fn test_text_truncates_to_column() {
    let root = Element::row()
        .child(Element::text("Lovelace").width(Size::Fixed(5)))
        .child(Element::text("x"));
    assert_eq!(render_lines(&root, 10), vec!["Love… x"]);
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_hidden_elements_produce_no_lines() {
    let mut hidden = Element::text("gone");
    hidden.hide();
    let root = Element::col()
        .child(hidden)
        .child(Element::text("also gone").class("hidden"))
        .child(Element::text("kept"));

    assert_eq!(render_lines(&root, 10), vec!["kept"]);
}

#[test]
fn test_hidden_row_child_gives_space_to_siblings() {
    let root = Element::row()
        .child(Element::text("label").class("hidden").width(Size::Percent(40.0)))
        .child(Element::text("value"));
    assert_eq!(render_lines(&root, 10), vec!["value"]);
}

// ============================================================================
// Inline styles
// ============================================================================

#[test]
fn test_block_child_breaks_row_into_stack() {
    let block = InlineStyle::new().display(Display::Block);
    let root = Element::new(Tag::Row)
        .child(Element::text("one").width(Size::Fixed(4)).inline(block.clone()))
        .child(Element::text("two").width(Size::Fixed(4)).inline(block));

    assert_eq!(render_lines(&root, 20), vec!["one", "two"]);
}

#[test]
fn test_inline_width_overrides_element_width() {
    let root = Element::col().child(
        Element::text("wide")
            .width(Size::Fixed(2))
            .inline(InlineStyle::new().width(Size::Percent(100.0))),
    );
    assert_eq!(render_lines(&root, 10), vec!["wide"]);
}

#[test]
fn test_border_appends_separator_unless_overridden() {
    let bordered = Element::row().child(
        Element::text("a")
            .width(Size::Fixed(3))
            .style(Style::new().border(Border::Single)),
    );
    assert_eq!(render_lines(&bordered, 10), vec!["a │"]);

    let plain = Element::row().child(
        Element::text("a")
            .width(Size::Fixed(3))
            .style(Style::new().border(Border::Single))
            .inline(InlineStyle::new().border(Border::None)),
    );
    assert_eq!(render_lines(&plain, 10), vec!["a"]);
}

#[test]
fn test_padding_top_inserts_blank_lines() {
    let root = Element::col()
        .child(Element::text("first"))
        .child(Element::text("second").inline(InlineStyle::new().padding_top(2)));
    assert_eq!(render_lines(&root, 10), vec!["first", "", "", "second"]);
}

#[test]
fn test_inline_text_align() {
    let root = Element::col().child(
        Element::text("x")
            .text_align(TextAlign::Right)
            .inline(InlineStyle::new().text_align(TextAlign::Left)),
    );
    assert_eq!(render_lines(&root, 5), vec!["x"]);
}

#[test]
fn test_max_width_caps_element() {
    let root = Element::col().child(
        Element::text("abcdefgh").inline(InlineStyle::new().max_width(Some(4))),
    );
    assert_eq!(render_lines(&root, 10), vec!["abc…"]);
}

#[test]
fn test_styles_are_inherited_by_children() {
    let root = Element::col()
        .style(Style::new().bold())
        .child(Element::text("b"));
    let lines = render(&root, 3);
    assert!(lines[0].spans[0].style.bold);
}
