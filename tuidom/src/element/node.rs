use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Direction, InlineStyle, Size, Style, Tag, TextAlign};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Class that removes an element from rendering, like Bootstrap's `.hidden`.
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Layout
    pub width: Size,
    pub direction: Direction,
    pub text_align: TextAlign,

    // Visual
    pub style: Style,
    /// Inline declarations, applied over the layout properties above.
    pub inline: InlineStyle,
    /// Equivalent of `display: none` set by scripting (jQuery `.hide()`).
    pub hidden: bool,

    // Interaction
    pub clickable: bool,

    // Custom data storage (for column names, row ids, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self::blank(generate_id("el"), Tag::Block, Direction::Column)
    }
}

impl Element {
    fn blank(id: String, tag: Tag, direction: Direction) -> Self {
        Self {
            id,
            tag,
            classes: Vec::new(),
            content: Content::None,
            width: Size::Auto,
            direction,
            text_align: TextAlign::Left,
            style: Style::default(),
            inline: InlineStyle::default(),
            hidden: false,
            clickable: false,
            data: HashMap::new(),
        }
    }

    pub fn new(tag: Tag) -> Self {
        let direction = match tag {
            Tag::Row | Tag::Cell | Tag::HeaderCell => Direction::Row,
            _ => Direction::Column,
        };
        Self::blank(generate_id(tag.name()), tag, direction)
    }

    pub fn box_() -> Self {
        Self::new(Tag::Block)
    }

    pub fn text(content: impl Into<String>) -> Self {
        let mut element = Self::blank(generate_id("text"), Tag::Span, Direction::Column);
        element.content = Content::Text(content.into());
        element
    }

    pub fn col() -> Self {
        Self::blank(generate_id("col"), Tag::Block, Direction::Column)
    }

    pub fn row() -> Self {
        Self::blank(generate_id("row"), Tag::Block, Direction::Row)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.add_class(class);
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn inline(mut self, inline: InlineStyle) -> Self {
        self.inline = inline;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.push_child(child);
        }
        self
    }

    // In-place mutation, for views that keep their element between renders.

    /// Add a class; empty names and duplicates are ignored.
    pub fn add_class(&mut self, class: impl AsRef<str>) {
        for name in class.as_ref().split_whitespace() {
            if !self.has_class(name) {
                self.classes.push(name.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        let names: Vec<&str> = class.split_whitespace().collect();
        self.classes.retain(|c| !names.contains(&c.as_str()));
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Whether the element takes part in rendering.
    pub fn is_visible(&self) -> bool {
        !self.hidden && !self.has_class(HIDDEN_CLASS)
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.hidden = !visible;
    }

    /// Merge declarations into the inline style.
    pub fn set_inline(&mut self, inline: &InlineStyle) {
        self.inline.merge(inline);
    }

    /// Drop the inline style entirely (`removeAttr("style")`).
    pub fn clear_inline(&mut self) {
        self.inline = InlineStyle::default();
    }

    /// Remove all content.
    pub fn empty(&mut self) {
        self.content = Content::None;
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// First descendant (or self) carrying `class`.
    pub fn find_mut(&mut self, class: &str) -> Option<&mut Element> {
        if self.has_class(class) {
            return Some(self);
        }

        if let Content::Children(children) = &mut self.content {
            for child in children {
                if let Some(found) = child.find_mut(class) {
                    return Some(found);
                }
            }
        }

        None
    }

    /// Concatenated text of this element and its descendants, ignoring visibility.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }
}
