use super::{Border, Display, Size, TextAlign, TextDecoration};

/// Per-element inline style declarations.
///
/// Every field is optional: `None` means the declaration is absent and the
/// element falls back to its own layout properties. `InlineStyle::default()`
/// is equivalent to an element without a style attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub display: Option<Display>,
    pub width: Option<Size>,
    /// `Some(None)` is an explicit `max-width: none`.
    pub max_width: Option<Option<u16>>,
    pub height: Option<Size>,
    pub text_align: Option<TextAlign>,
    pub border: Option<Border>,
    pub text_decoration: Option<TextDecoration>,
    pub padding_top: Option<u16>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = Some(width);
        self
    }

    pub fn max_width(mut self, max_width: Option<u16>) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = Some(height);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn text_decoration(mut self, decoration: TextDecoration) -> Self {
        self.text_decoration = Some(decoration);
        self
    }

    pub fn padding_top(mut self, lines: u16) -> Self {
        self.padding_top = Some(lines);
        self
    }

    /// Overlay `other` on top of `self`; declarations present in `other` win.
    pub fn merge(&mut self, other: &InlineStyle) {
        if other.display.is_some() {
            self.display = other.display;
        }
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.max_width.is_some() {
            self.max_width = other.max_width;
        }
        if other.height.is_some() {
            self.height = other.height;
        }
        if other.text_align.is_some() {
            self.text_align = other.text_align;
        }
        if other.border.is_some() {
            self.border = other.border;
        }
        if other.text_decoration.is_some() {
            self.text_decoration = other.text_decoration;
        }
        if other.padding_top.is_some() {
            self.padding_top = other.padding_top;
        }
    }
}
