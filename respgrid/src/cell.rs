//! Body cells that follow the grid's layout mode.

use std::sync::{Arc, RwLock};

use log::trace;
use tuidom::element::HIDDEN_CLASS;
use tuidom::{
    Border, Display, Element, InlineStyle, Size, Style, Tag, TextAlign, TextDecoration,
};

use crate::channel::{ModeChannel, Subscription};
use crate::column::Column;
use crate::mode::LayoutMode;
use crate::record::Record;

/// Class of the inline label shown in condensed mode.
pub const LABEL_CLASS: &str = "responsive-header-label";

/// Class present on every responsive data cell.
pub const CELL_CLASS: &str = "responsive-cell";

/// Share of the cell width taken by the inline label.
const LABEL_WIDTH_PERCENT: f32 = 40.0;

/// A rendered body cell.
///
/// One instance exists per (record, column) pair per render pass; the grid
/// destroys and recreates cells whenever the body is re-rendered.
pub trait DataCell: Send + Sync {
    /// (Re)build content and register for mode changes.
    fn render(&mut self);

    /// Restyle for `mode`.
    fn apply_mode(&mut self, mode: LayoutMode);

    /// Snapshot of the cell's current element.
    fn element(&self) -> Element;

    /// Release every registration. Idempotent.
    fn destroy(&mut self);

    /// Whether the cell currently listens for mode changes.
    fn is_subscribed(&self) -> bool;
}

/// Creates the data cell for a (record, column) pair.
pub trait DataCellFactory: Send + Sync {
    fn create(&self, record: Arc<Record>, column: Arc<Column>) -> Box<dyn DataCell>;
}

impl<F> DataCellFactory for F
where
    F: Fn(Arc<Record>, Arc<Column>) -> Box<dyn DataCell> + Send + Sync,
{
    fn create(&self, record: Arc<Record>, column: Arc<Column>) -> Box<dyn DataCell> {
        self(record, column)
    }
}

/// Factory for [`ResponsiveDataCell`], the default body cell type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponsiveCellFactory;

impl DataCellFactory for ResponsiveCellFactory {
    fn create(&self, record: Arc<Record>, column: Arc<Column>) -> Box<dyn DataCell> {
        Box::new(ResponsiveDataCell::new(record, column))
    }
}

/// Body cell with an inline column label for condensed mode.
///
/// The label is always part of the element; the layout mode only toggles
/// its visibility together with the cell's condensed inline styles.
#[derive(Debug)]
pub struct ResponsiveDataCell {
    record: Arc<Record>,
    column: Arc<Column>,
    element: Arc<RwLock<Element>>,
    subscription: Option<Subscription>,
}

impl ResponsiveDataCell {
    pub fn new(record: Arc<Record>, column: Arc<Column>) -> Self {
        let width = column.width.map(Size::Fixed).unwrap_or(Size::Auto);
        let element = Element::new(Tag::Cell)
            .id(format!("td-{}-{}", record.id, column.name))
            .class(CELL_CLASS)
            .width(width)
            .style(Style::new().border(Border::Single));

        Self {
            record,
            column,
            element: Arc::new(RwLock::new(element)),
            subscription: None,
        }
    }

    pub fn factory() -> ResponsiveCellFactory {
        ResponsiveCellFactory
    }

    pub fn column(&self) -> &Arc<Column> {
        &self.column
    }

    pub fn record(&self) -> &Arc<Record> {
        &self.record
    }

    /// Build content, apply the current mode and subscribe to the grid's
    /// channel. Any earlier subscription is released first, so repeated
    /// renders never stack listeners.
    pub fn render(&mut self) -> &mut Self {
        if let Some(mut previous) = self.subscription.take() {
            previous.unsubscribe();
        }

        let label = Element::new(Tag::Label)
            .class(LABEL_CLASS)
            .width(Size::Percent(LABEL_WIDTH_PERCENT))
            .style(Style::new().bold())
            .child(Element::text(format!("{}: ", self.column.label)));
        let raw = self.column.raw_value(&self.record);
        let value = Element::text(self.column.format(raw.as_ref()));

        let mode = self
            .column
            .channel()
            .map(ModeChannel::current)
            .unwrap_or_else(|| self.column.initial_mode());

        {
            let mut element = self.write();
            element.empty();
            if let Some(class) = &self.column.hide_class {
                element.add_class(class);
            }
            if self.column.is_editable() {
                element.add_class("editable");
            }
            element.push_child(label);
            element.push_child(value);
            apply_mode_to(&mut element, mode, self.column.header_class.as_deref());
        }

        if let Some(channel) = self.column.channel() {
            let element = Arc::clone(&self.element);
            let header_class = self.column.header_class.clone();
            self.subscription = Some(channel.subscribe(move |mode| {
                let mut element = element.write().unwrap_or_else(|p| p.into_inner());
                apply_mode_to(&mut element, mode, header_class.as_deref());
            }));
        }

        trace!("rendered cell {} in {mode} mode", self.read().id);
        self
    }

    pub fn apply_mode(&mut self, mode: LayoutMode) -> &mut Self {
        let header_class = self.column.header_class.clone();
        apply_mode_to(&mut self.write(), mode, header_class.as_deref());
        self
    }

    pub fn destroy(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Element> {
        self.element.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Element> {
        self.element.write().unwrap_or_else(|p| p.into_inner())
    }
}

impl DataCell for ResponsiveDataCell {
    fn render(&mut self) {
        ResponsiveDataCell::render(self);
    }

    fn apply_mode(&mut self, mode: LayoutMode) {
        ResponsiveDataCell::apply_mode(self, mode);
    }

    fn element(&self) -> Element {
        self.read().clone()
    }

    fn destroy(&mut self) {
        ResponsiveDataCell::destroy(self);
    }

    fn is_subscribed(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(Subscription::is_active)
    }
}

impl Drop for ResponsiveDataCell {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Inline declarations that pull a cell out of the table box model.
pub fn condensed_style() -> InlineStyle {
    InlineStyle::new()
        .border(Border::None)
        .display(Display::Block)
        .width(Size::Percent(100.0))
        .text_align(TextAlign::Left)
        .text_decoration(TextDecoration::None)
        .max_width(None)
        .height(Size::Auto)
}

/// Binary restyle of a data cell element. The outcome depends only on
/// `mode`, never on which mode was applied before.
pub fn apply_mode_to(element: &mut Element, mode: LayoutMode, header_class: Option<&str>) {
    match mode {
        LayoutMode::Expanded => {
            if let Some(label) = element.find_mut(LABEL_CLASS) {
                label.add_class(HIDDEN_CLASS);
            }
            element.clear_inline();
            if let Some(class) = header_class {
                element.remove_class(class);
            }
        }
        LayoutMode::Condensed => {
            if let Some(label) = element.find_mut(LABEL_CLASS) {
                label.remove_class(HIDDEN_CLASS);
            }
            element.set_inline(&condensed_style());
            if let Some(class) = header_class {
                element.add_class(class);
                element.set_inline(&InlineStyle::new().padding_top(1));
            }
        }
    }
}
