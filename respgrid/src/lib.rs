//! Responsive tables for `tuidom` element trees.
//!
//! Below a configurable width breakpoint the grid hides its header row and
//! every data cell renders an inline label naming its column, re-flowing
//! the table into stacked cards. A [`ResponsiveGrid`] owns the breakpoint
//! configuration and a per-instance [`ModeChannel`]; data cells subscribe
//! to that channel and restyle themselves when the layout mode flips.

pub mod breakpoint;
pub mod cell;
pub mod channel;
pub mod column;
pub mod error;
pub mod formatter;
pub mod grid;
pub mod header;
pub mod mode;
pub mod options;
pub mod record;
pub mod viewport;

pub use breakpoint::{BreakSize, Breakpoints};
pub use cell::{DataCell, DataCellFactory, ResponsiveCellFactory, ResponsiveDataCell};
pub use channel::{ModeChannel, Subscription};
pub use column::{Column, FieldExtractor, ValueExtractor};
pub use error::{GridError, Result};
pub use formatter::{BooleanFormatter, CellFormatter, NumberFormatter, StringFormatter};
pub use grid::ResponsiveGrid;
pub use header::{HeaderCell, HeaderCellFactory, ResponsiveHeaderCell, SortDirection};
pub use mode::LayoutMode;
pub use options::{GridOptions, ResolvedConfig};
pub use record::Record;
pub use viewport::{FixedViewport, TerminalViewport, Viewport};

pub mod prelude {
    pub use crate::{
        BreakSize, Column, GridError, GridOptions, LayoutMode, Record, ResponsiveGrid,
        SortDirection, Viewport,
    };
}
