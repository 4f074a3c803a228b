//! Line renderer.
//!
//! Turns an element tree into fixed-width lines of styled spans. Row
//! elements lay their children out side by side; a child carrying an inline
//! `display: block` breaks the row so every child stacks, which is how a
//! table cell escapes the table box model.

use crate::element::{Content, Element};
use crate::text::{display_width, pad_to_width};
use crate::types::{Border, Direction, Display, Size, TextDecoration, TextStyle};

/// Gap between horizontally laid out siblings.
const COLUMN_GAP: usize = 1;

const BORDER_CHAR: &str = "│";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn blank(width: usize) -> Self {
        let mut line = Self::default();
        line.push(" ".repeat(width), TextStyle::new());
        line
    }

    fn push(&mut self, text: impl Into<String>, style: TextStyle) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.spans.push(Span { text, style }),
        }
    }

    fn append(&mut self, other: Line) {
        for span in other.spans {
            self.push(span.text, span.style);
        }
    }

    /// Plain text of the line.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }
}

/// Render the tree to styled lines, each exactly `width` cells wide.
pub fn render(root: &Element, width: u16) -> Vec<Line> {
    let mut lines = Vec::new();
    render_element(root, width as usize, TextStyle::new(), &mut lines);
    lines
}

/// Render the tree to plain text lines with trailing whitespace trimmed.
pub fn render_lines(root: &Element, width: u16) -> Vec<String> {
    render(root, width)
        .iter()
        .map(|line| line.text().trim_end().to_string())
        .collect()
}

fn render_element(element: &Element, width: usize, inherited: TextStyle, out: &mut Vec<Line>) {
    if !element.is_visible() {
        return;
    }

    let inline = &element.inline;
    let width = match inline.max_width {
        Some(Some(max)) => width.min(max as usize),
        _ => width,
    };

    for _ in 0..inline.padding_top.unwrap_or(0) {
        out.push(Line::blank(width));
    }

    let border = inline.border.unwrap_or(element.style.border);
    let inner_width = match border {
        Border::Single => width.saturating_sub(1),
        Border::None => width,
    };

    let style = effective_style(element, inherited);
    let mut lines = Vec::new();

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            let align = inline.text_align.unwrap_or(element.text_align);
            let mut line = Line::default();
            line.push(pad_to_width(text, inner_width, align), style);
            lines.push(line);
        }
        Content::Children(children) => {
            let visible: Vec<&Element> = children.iter().filter(|c| c.is_visible()).collect();
            let stacked = element.direction == Direction::Column
                || visible
                    .iter()
                    .any(|c| c.inline.display == Some(Display::Block));

            if stacked {
                render_stacked(&visible, inner_width, style, &mut lines);
            } else {
                render_row(&visible, inner_width, style, &mut lines);
            }
        }
    }

    for mut line in lines {
        if border == Border::Single {
            line.push(BORDER_CHAR, TextStyle::new().dim());
        }
        out.push(line);
    }
}

fn effective_style(element: &Element, inherited: TextStyle) -> TextStyle {
    let own = element.style.text_style;
    let mut style = TextStyle {
        bold: inherited.bold || own.bold,
        underline: inherited.underline || own.underline,
        dim: inherited.dim || own.dim,
    };
    if element.inline.text_decoration == Some(TextDecoration::None) {
        style.underline = false;
    }
    style
}

fn element_width(element: &Element) -> Size {
    element.inline.width.unwrap_or(element.width)
}

fn resolve_width(size: Size, available: usize) -> Option<usize> {
    match size {
        Size::Fixed(n) => Some((n as usize).min(available)),
        Size::Percent(p) => Some(((available as f32) * p / 100.0).floor() as usize),
        Size::Fill | Size::Auto => None,
    }
}

fn render_stacked(children: &[&Element], width: usize, style: TextStyle, out: &mut Vec<Line>) {
    for child in children {
        let child_width = resolve_width(element_width(child), width).unwrap_or(width);
        let mut child_lines = Vec::new();
        render_element(child, child_width, style, &mut child_lines);
        for mut line in child_lines {
            let used = line.width();
            if used < width {
                line.push(" ".repeat(width - used), TextStyle::new());
            }
            out.push(line);
        }
    }
}

fn render_row(children: &[&Element], width: usize, style: TextStyle, out: &mut Vec<Line>) {
    if children.is_empty() {
        return;
    }

    let gaps = COLUMN_GAP * (children.len() - 1);
    let available = width.saturating_sub(gaps);

    // Fixed and percent widths first, the remainder is shared by the rest.
    let resolved: Vec<Option<usize>> = children
        .iter()
        .map(|c| resolve_width(element_width(c), available))
        .collect();
    let claimed: usize = resolved.iter().flatten().sum();
    let flexible = resolved.iter().filter(|w| w.is_none()).count();
    let remainder = available.saturating_sub(claimed);

    let mut widths = Vec::with_capacity(children.len());
    let mut handed_out = 0;
    let mut flex_seen = 0;
    for w in &resolved {
        match w {
            Some(w) => widths.push(*w),
            None => {
                flex_seen += 1;
                // Last flexible child absorbs rounding.
                let share = if flex_seen == flexible {
                    remainder - handed_out
                } else {
                    remainder / flexible
                };
                handed_out += share;
                widths.push(share);
            }
        }
    }

    let rendered: Vec<Vec<Line>> = children
        .iter()
        .zip(&widths)
        .map(|(child, w)| {
            let mut lines = Vec::new();
            render_element(child, *w, style, &mut lines);
            lines
        })
        .collect();

    let height = rendered.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..height {
        let mut line = Line::default();
        for (i, (lines, w)) in rendered.iter().zip(&widths).enumerate() {
            if i > 0 {
                line.push(" ".repeat(COLUMN_GAP), TextStyle::new());
            }
            match lines.get(row) {
                Some(cell_line) => line.append(cell_line.clone()),
                None => line.push(" ".repeat(*w), TextStyle::new()),
            }
        }
        let used = line.width();
        if used < width {
            line.push(" ".repeat(width - used), TextStyle::new());
        }
        out.push(line);
    }
}
