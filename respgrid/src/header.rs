//! Header row cells.

use tuidom::{Border, Element, Size, Style, Tag};

use crate::column::Column;

/// Sort order of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Data key carrying the column name on sortable header cells.
pub const SORT_KEY: &str = "column";

/// Builds the header cell element for a column.
pub trait HeaderCellFactory: Send + Sync {
    fn render(&self, column: &Column, sort: Option<SortDirection>) -> Element;
}

/// Plain header cell: label, sort indicator and the click-to-sort hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderCell;

impl HeaderCell {
    pub fn render(column: &Column, sort: Option<SortDirection>) -> Element {
        let width = column.width.map(Size::Fixed).unwrap_or(Size::Auto);
        let mut cell = Element::new(Tag::HeaderCell)
            .id(format!("th-{}", column.name))
            .width(width)
            .style(Style::new().bold().border(Border::Single))
            .child(Element::text(column.label.clone()));

        if column.sortable {
            cell.add_class("sortable");
            cell = cell.clickable(true).data(SORT_KEY, column.name.clone());
        }

        if let Some(direction) = sort {
            cell.add_class(direction.class());
            cell.push_child(Element::text(format!(" {}", direction.indicator())));
        }

        cell
    }
}

impl HeaderCellFactory for HeaderCell {
    fn render(&self, column: &Column, sort: Option<SortDirection>) -> Element {
        HeaderCell::render(column, sort)
    }
}

/// Header cell that also carries the column's hide class, so header and
/// data cells of a column show and hide together.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponsiveHeaderCell;

impl HeaderCellFactory for ResponsiveHeaderCell {
    fn render(&self, column: &Column, sort: Option<SortDirection>) -> Element {
        let mut cell = HeaderCell::render(column, sort);
        if let Some(class) = &column.hide_class {
            cell.add_class(class);
        }
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_header_renders_label() {
        let column = Column::new("name", "Name");
        let cell = HeaderCell::render(&column, None);
        assert_eq!(cell.tag, Tag::HeaderCell);
        assert_eq!(cell.text_content(), "Name");
        assert!(!cell.clickable);
        assert!(cell.get_data(SORT_KEY).is_none());
    }

    #[test]
    fn test_sortable_header_binds_column_and_indicator() {
        let column = Column::new("name", "Name").sortable();
        let cell = HeaderCell::render(&column, Some(SortDirection::Descending));
        assert!(cell.clickable);
        assert!(cell.has_class("sortable"));
        assert!(cell.has_class("descending"));
        assert_eq!(cell.get_data(SORT_KEY).map(String::as_str), Some("name"));
        assert_eq!(cell.text_content(), "Name ▼");
    }

    #[test]
    fn test_responsive_header_adds_hide_class() {
        let column = Column::new("notes", "Notes").hide_class("hidden-xs");
        let cell = ResponsiveHeaderCell.render(&column, None);
        assert!(cell.has_class("hidden-xs"));
        assert_eq!(cell.text_content(), "Notes");

        let plain = ResponsiveHeaderCell.render(&Column::new("a", "A"), None);
        assert!(plain.classes.is_empty());
    }

    #[test]
    fn test_sort_direction_toggles() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }
}
