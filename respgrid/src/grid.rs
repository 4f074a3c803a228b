//! The responsive grid and its layout mode controller.

use std::cmp::Ordering;
use std::sync::Arc;

use log::{debug, info, trace, warn};
use serde_json::Value;
use tuidom::{Element, Event, Tag};
use uuid::Uuid;

use crate::cell::DataCell;
use crate::channel::ModeChannel;
use crate::column::Column;
use crate::error::{GridError, Result};
use crate::header::SortDirection;
use crate::mode::LayoutMode;
use crate::options::{GridOptions, ResolvedConfig};
use crate::record::Record;
use crate::viewport::Viewport;

/// One body row: the record and a cell per column.
struct BodyRow {
    record: Arc<Record>,
    cells: Vec<Box<dyn DataCell>>,
}

/// A table that re-flows into stacked, labeled cards below a width breakpoint.
///
/// The grid embeds the layout mode controller: it resolves the breakpoint
/// configuration once, computes the mode from the viewport width, hides the
/// header row while condensed and notifies its cells through a
/// [`ModeChannel`] only when the mode actually changes.
///
/// # Example
///
/// ```
/// use respgrid::{Column, FixedViewport, GridOptions, LayoutMode, Record, ResponsiveGrid};
/// use tuidom::Event;
///
/// let viewport = FixedViewport::new(1024);
/// let mut grid = ResponsiveGrid::new(
///     vec![Column::new("name", "Name")],
///     vec![Record::new("1").field("name", "Ada")],
///     &GridOptions::new(),
///     viewport.clone(),
/// ).unwrap();
/// grid.render().unwrap();
/// assert_eq!(grid.mode(), LayoutMode::Expanded);
///
/// viewport.set_width(600);
/// grid.handle_event(&Event::Resize { width: 600, height: 40 });
/// assert_eq!(grid.mode(), LayoutMode::Condensed);
/// assert!(!grid.header_visible());
/// ```
pub struct ResponsiveGrid {
    instance: String,
    config: ResolvedConfig,
    viewport: Arc<dyn Viewport>,
    channel: ModeChannel,
    columns: Vec<Arc<Column>>,
    records: Vec<Arc<Record>>,
    header: Vec<Element>,
    rows: Vec<BodyRow>,
    sort: Option<(String, SortDirection)>,
    /// Mode seen by the last resize pass; `None` before the first one.
    previous_mode: Option<LayoutMode>,
    header_visible: bool,
    /// Whether resize events are handled at all.
    listening: bool,
    mode_changes: usize,
    destroyed: bool,
}

impl ResponsiveGrid {
    /// Build a grid. Columns are bound to this instance here, before any
    /// cell exists.
    pub fn new(
        columns: Vec<Column>,
        records: Vec<Record>,
        options: &GridOptions,
        viewport: impl Viewport + 'static,
    ) -> Result<Self> {
        let config = options.resolve()?;
        let viewport: Arc<dyn Viewport> = Arc::new(viewport);

        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(GridError::DuplicateColumn(column.name.clone()));
            }
        }

        let instance = Uuid::new_v4().simple().to_string();

        let listening = match (config.threshold, viewport.width()) {
            (Some(_), Some(_)) => true,
            (Some(threshold), None) => {
                warn!("grid {instance}: no viewport width available, ignoring breakpoint {threshold}");
                false
            }
            (None, _) => false,
        };

        let initial = compute_mode(&config, viewport.as_ref(), listening);
        let channel = ModeChannel::new(ModeChannel::name_for(&instance), initial);

        let columns = columns
            .into_iter()
            .map(|mut column| {
                column.bind(initial, channel.clone(), config.default_editable);
                Arc::new(column)
            })
            .collect();

        info!(
            "grid {instance}: break size {} threshold {:?}, initial mode {initial}",
            config.break_size, config.threshold
        );

        Ok(Self {
            instance,
            config,
            viewport,
            channel,
            columns,
            records: records.into_iter().map(Arc::new).collect(),
            header: Vec::new(),
            rows: Vec::new(),
            sort: None,
            previous_mode: None,
            header_visible: true,
            listening,
            mode_changes: 0,
            destroyed: false,
        })
    }

    // -------------------------------------------------------------------------
    // Layout mode
    // -------------------------------------------------------------------------

    /// Mode for the current viewport width. No side effects.
    pub fn compute_mode(&self) -> LayoutMode {
        compute_mode(&self.config, self.viewport.as_ref(), self.listening)
    }

    /// Re-evaluate the layout mode.
    ///
    /// Header visibility is updated on every call; cells are notified only
    /// when the mode differs from the previous pass. Returns whether a
    /// notification was published.
    /// A grid without an active breakpoint never publishes and keeps its
    /// header visible.
    pub fn on_resize(&mut self) -> bool {
        if self.destroyed || !self.listening {
            return false;
        }

        let mode = self.compute_mode();
        let previous = self.previous_mode.replace(mode);
        self.header_visible = mode == LayoutMode::Expanded;

        if previous == Some(mode) {
            trace!("grid {}: still {mode}, broadcast suppressed", self.instance);
            return false;
        }

        let reached = self.channel.publish(mode);
        self.mode_changes += 1;
        debug!(
            "grid {}: {:?} -> {mode}, notified {reached} cells",
            self.instance, previous
        );
        true
    }

    /// Window resize hook. Ignored when the grid is not responsive.
    ///
    /// Returns whether the layout mode changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Resize { .. } if self.listening => self.on_resize(),
            _ => false,
        }
    }

    /// Current layout mode.
    pub fn mode(&self) -> LayoutMode {
        self.previous_mode.unwrap_or_else(|| self.channel.current())
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    /// Whether a breakpoint is active and resize events are handled.
    pub fn is_responsive(&self) -> bool {
        self.listening
    }

    /// Number of mode notifications published so far.
    pub fn mode_changes(&self) -> usize {
        self.mode_changes
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build header and body cells, then run one synchronous layout pass so
    /// the first paint already matches the viewport.
    pub fn render(&mut self) -> Result<&mut Self> {
        self.ensure_alive()?;
        self.render_header();
        self.render_body();
        if self.listening {
            self.on_resize();
        }
        Ok(self)
    }

    fn render_header(&mut self) {
        self.header = self
            .columns
            .iter()
            .map(|column| column.header_factory().render(column, self.sort_of(&column.name)))
            .collect();
    }

    fn render_body(&mut self) {
        for row in &mut self.rows {
            for cell in &mut row.cells {
                cell.destroy();
            }
        }

        self.rows = self
            .records
            .iter()
            .map(|record| BodyRow {
                record: Arc::clone(record),
                cells: self
                    .columns
                    .iter()
                    .map(|column| {
                        let mut cell = column
                            .cell_factory()
                            .create(Arc::clone(record), Arc::clone(column));
                        cell.render();
                        cell
                    })
                    .collect(),
            })
            .collect();

        trace!(
            "grid {}: rendered {} rows, {} subscribers",
            self.instance,
            self.rows.len(),
            self.channel.subscriber_count()
        );
    }

    /// Snapshot of the grid as an element tree.
    pub fn element(&self) -> Element {
        let mut head = Element::new(Tag::Head)
            .child(Element::new(Tag::Row).children(self.header.iter().cloned()));
        head.set_visible(self.header_visible);

        let body = Element::new(Tag::Body).children(self.rows.iter().map(|row| {
            Element::new(Tag::Row)
                .id(format!("tr-{}", row.record.id))
                .children(row.cells.iter().map(|cell| cell.element()))
        }));

        Element::new(Tag::Table)
            .id(format!("grid-{}", self.instance))
            .class("backgrid responsive-grid")
            .child(head)
            .child(body)
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Sort rows by a column and re-render the body.
    pub fn sort_by(&mut self, column: &str, direction: SortDirection) -> Result<()> {
        self.ensure_alive()?;
        let column = self
            .columns
            .iter()
            .find(|c| c.name == column)
            .cloned()
            .ok_or_else(|| GridError::UnknownColumn(column.to_string()))?;

        let mut keyed: Vec<(Option<Value>, Arc<Record>)> = self
            .records
            .drain(..)
            .map(|record| (column.raw_value(&record), record))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| {
            let ordering = compare_values(a.as_ref(), b.as_ref());
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        self.records = keyed.into_iter().map(|(_, record)| record).collect();
        self.sort = Some((column.name.clone(), direction));

        debug!("grid {}: sorted by {} {direction:?}", self.instance, column.name);
        self.refresh();
        Ok(())
    }

    /// Header click: sort a sortable column, flipping direction on repeat
    /// clicks. Returns `false` for columns that are not sortable.
    pub fn handle_header_click(&mut self, column: &str) -> Result<bool> {
        self.ensure_alive()?;
        let sortable = self
            .columns
            .iter()
            .find(|c| c.name == column)
            .map(|c| c.sortable)
            .ok_or_else(|| GridError::UnknownColumn(column.to_string()))?;
        if !sortable {
            return Ok(false);
        }

        let direction = match self.sort_of(column) {
            Some(direction) => direction.toggled(),
            None => SortDirection::Ascending,
        };
        self.sort_by(column, direction)?;
        Ok(true)
    }

    /// Replace the records and re-render the body.
    pub fn set_records(&mut self, records: Vec<Record>) -> Result<()> {
        self.ensure_alive()?;
        self.records = records.into_iter().map(Arc::new).collect();
        self.sort = None;
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        self.render_header();
        self.render_body();
        if self.listening {
            self.on_resize();
        }
    }

    fn sort_of(&self, column: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|(name, _)| name == column)
            .map(|(_, direction)| *direction)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Generated id of this grid instance.
    pub fn instance_id(&self) -> &str {
        &self.instance
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn channel(&self) -> &ModeChannel {
        &self.channel
    }

    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().map(|r| r.as_ref())
    }

    /// Cells of the rendered body, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &dyn DataCell> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter().map(|cell| cell.as_ref()))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Destroy every cell, close the mode channel and stop handling resize
    /// events. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        for row in &mut self.rows {
            for cell in &mut row.cells {
                cell.destroy();
            }
        }
        self.rows.clear();
        self.channel.close();
        self.listening = false;
        self.destroyed = true;
        debug!("grid {} destroyed", self.instance);
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn ensure_alive(&self) -> Result<()> {
        if self.destroyed {
            Err(GridError::Destroyed)
        } else {
            Ok(())
        }
    }
}

impl Drop for ResponsiveGrid {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for ResponsiveGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponsiveGrid")
            .field("instance", &self.instance)
            .field("config", &self.config)
            .field("mode", &self.mode())
            .field("columns", &self.columns.len())
            .field("rows", &self.rows.len())
            .field("listening", &self.listening)
            .finish()
    }
}

fn compute_mode(config: &ResolvedConfig, viewport: &dyn Viewport, responsive: bool) -> LayoutMode {
    if !responsive {
        return LayoutMode::Expanded;
    }
    match (config.threshold, viewport.width()) {
        (Some(threshold), Some(width)) => LayoutMode::for_width(width, threshold),
        _ => LayoutMode::Expanded,
    }
}

/// Total order over raw cell values: missing/null first, then numbers,
/// case-insensitive strings and booleans; mixed kinds compare as text.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => {
            x.to_lowercase().cmp(&y.to_lowercase())
        }
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_compare_values_orders_nulls_first() {
        assert_eq!(compare_values(None, Some(&json!(1))), Ordering::Less);
        assert_eq!(compare_values(Some(&json!(null)), None), Ordering::Equal);
        assert_eq!(compare_values(Some(&json!("a")), Some(&Value::Null)), Ordering::Greater);
    }

    #[test]
    fn test_compare_values_numbers_and_strings() {
        assert_eq!(compare_values(Some(&json!(2)), Some(&json!(10))), Ordering::Less);
        assert_eq!(compare_values(Some(&json!(2.5)), Some(&json!(2))), Ordering::Greater);
        assert_eq!(compare_values(Some(&json!("bob")), Some(&json!("Alice"))), Ordering::Greater);
        assert_eq!(compare_values(Some(&json!(false)), Some(&json!(true))), Ordering::Less);
    }
}
