//! Column configuration shared by every cell rendered for a column.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::cell::{DataCellFactory, ResponsiveDataCell};
use crate::channel::ModeChannel;
use crate::formatter::{CellFormatter, StringFormatter};
use crate::header::{HeaderCellFactory, ResponsiveHeaderCell};
use crate::mode::LayoutMode;
use crate::record::Record;

/// Produces the raw value a cell hands to its formatter.
///
/// The default [`FieldExtractor`] reads the record field named by the
/// column. Supply another implementation (or a closure) to display derived
/// values without writing a custom formatter.
pub trait ValueExtractor: Send + Sync {
    fn raw_value(&self, record: &Record, column: &Column) -> Option<Value>;
}

/// Reads `record[column.name]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl ValueExtractor for FieldExtractor {
    fn raw_value(&self, record: &Record, column: &Column) -> Option<Value> {
        record.get(&column.name).cloned()
    }
}

impl<F> ValueExtractor for F
where
    F: Fn(&Record) -> Option<Value> + Send + Sync,
{
    fn raw_value(&self, record: &Record, _column: &Column) -> Option<Value> {
        self(record)
    }
}

/// Column configuration.
///
/// Built by the host, then bound to a grid once at construction, which
/// injects the initial layout mode, the grid's mode channel, default cell
/// types and the resolved editability. After that the column is shared
/// read-only (`Arc<Column>`) with every cell rendered for it.
///
/// # Examples
///
/// ```
/// use respgrid::{Column, NumberFormatter};
///
/// let columns = vec![
///     Column::new("name", "Name").width(20).sortable(),
///     Column::new("salary", "Salary")
///         .formatter(NumberFormatter::new(0))
///         .header_class("emphasis"),
///     Column::new("notes", "Notes").hide_class("hidden-xs"),
/// ];
/// assert_eq!(columns[0].label, "Name");
/// ```
#[derive(Clone)]
pub struct Column {
    /// Field name in the record.
    pub name: String,
    /// Display label, used by the header and the condensed inline label.
    pub label: String,
    /// Width in terminal columns; `None` shares the remaining space.
    pub width: Option<u16>,
    pub sortable: bool,
    /// Class applied to both header and data cells, e.g. to hide a column at some tier.
    pub hide_class: Option<String>,
    /// Class added to data cells while condensed, to decorate the inline label.
    pub header_class: Option<String>,
    /// Explicit editability; `None` defers to the grid default.
    pub editable: Option<bool>,
    formatter: Arc<dyn CellFormatter>,
    extractor: Arc<dyn ValueExtractor>,
    header_cell: Option<Arc<dyn HeaderCellFactory>>,
    cell: Option<Arc<dyn DataCellFactory>>,
    binding: Option<Binding>,
}

/// Values injected by the owning grid.
#[derive(Debug, Clone)]
struct Binding {
    initial_mode: LayoutMode,
    channel: ModeChannel,
    editable: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            width: None,
            sortable: false,
            hide_class: None,
            header_class: None,
            editable: None,
            formatter: Arc::new(StringFormatter),
            extractor: Arc::new(FieldExtractor),
            header_cell: None,
            cell: None,
            binding: None,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Make the column sortable from its header.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn hide_class(mut self, class: impl Into<String>) -> Self {
        self.hide_class = Some(class.into());
        self
    }

    pub fn header_class(mut self, class: impl Into<String>) -> Self {
        self.header_class = Some(class.into());
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = Some(editable);
        self
    }

    pub fn formatter(mut self, formatter: impl CellFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    pub fn extractor(mut self, extractor: impl ValueExtractor + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Use a custom header cell type for this column.
    pub fn header_cell(mut self, factory: impl HeaderCellFactory + 'static) -> Self {
        self.header_cell = Some(Arc::new(factory));
        self
    }

    /// Use a custom data cell type for this column.
    pub fn cell(mut self, factory: impl DataCellFactory + 'static) -> Self {
        self.cell = Some(Arc::new(factory));
        self
    }

    // -------------------------------------------------------------------------
    // Grid binding
    // -------------------------------------------------------------------------

    /// Inject grid-level values. Called by the grid before any cell exists.
    pub(crate) fn bind(&mut self, initial_mode: LayoutMode, channel: ModeChannel, default_editable: bool) {
        if self.header_cell.is_none() {
            self.header_cell = Some(Arc::new(ResponsiveHeaderCell));
        }
        if self.cell.is_none() {
            self.cell = Some(Arc::new(ResponsiveDataCell::factory()));
        }
        self.binding = Some(Binding {
            initial_mode,
            channel,
            editable: self.editable.unwrap_or(default_editable),
        });
    }

    /// Layout mode computed when the grid was built.
    pub fn initial_mode(&self) -> LayoutMode {
        self.binding
            .as_ref()
            .map(|b| b.initial_mode)
            .unwrap_or_default()
    }

    /// Mode channel of the owning grid, if bound.
    pub fn channel(&self) -> Option<&ModeChannel> {
        self.binding.as_ref().map(|b| &b.channel)
    }

    /// Resolved editability (explicit setting, else the grid default).
    pub fn is_editable(&self) -> bool {
        match &self.binding {
            Some(binding) => binding.editable,
            None => self.editable.unwrap_or(false),
        }
    }

    pub fn raw_value(&self, record: &Record) -> Option<Value> {
        self.extractor.raw_value(record, self)
    }

    pub fn format(&self, raw: Option<&Value>) -> String {
        self.formatter.from_raw(raw)
    }

    pub(crate) fn header_factory(&self) -> Arc<dyn HeaderCellFactory> {
        self.header_cell
            .clone()
            .unwrap_or_else(|| Arc::new(ResponsiveHeaderCell))
    }

    pub(crate) fn cell_factory(&self) -> Arc<dyn DataCellFactory> {
        self.cell
            .clone()
            .unwrap_or_else(|| Arc::new(ResponsiveDataCell::factory()))
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .field("hide_class", &self.hide_class)
            .field("header_class", &self.header_class)
            .field("editable", &self.is_editable())
            .field("bound", &self.binding.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_field_extractor_reads_named_field() {
        let record = Record::new("1").field("name", "Ada");
        let column = Column::new("name", "Name");
        assert_eq!(column.raw_value(&record), Some(json!("Ada")));
        assert_eq!(Column::new("missing", "M").raw_value(&record), None);
    }

    #[test]
    fn test_closure_extractor() {
        let record = Record::new("1").field("first", "Ada").field("last", "Lovelace");
        let column = Column::new("full", "Full name").extractor(|r: &Record| {
            let first = r.get("first")?.as_str()?;
            let last = r.get("last")?.as_str()?;
            Some(Value::from(format!("{first} {last}")))
        });
        assert_eq!(column.raw_value(&record), Some(json!("Ada Lovelace")));
    }

    #[test]
    fn test_bind_resolves_editability() {
        let channel = ModeChannel::new("c", LayoutMode::Condensed);

        let mut inherits = Column::new("a", "A");
        inherits.bind(LayoutMode::Condensed, channel.clone(), true);
        assert!(inherits.is_editable());
        assert_eq!(inherits.initial_mode(), LayoutMode::Condensed);
        assert_eq!(inherits.channel().map(ModeChannel::name), Some("c"));

        let mut explicit = Column::new("b", "B").editable(false);
        explicit.bind(LayoutMode::Expanded, channel, true);
        assert!(!explicit.is_editable());
    }

    #[test]
    fn test_unbound_column_defaults() {
        let column = Column::new("a", "A");
        assert!(column.channel().is_none());
        assert_eq!(column.initial_mode(), LayoutMode::Expanded);
        assert!(!column.is_editable());
    }
}
