use thiserror::Error;

use crate::breakpoint::BreakSize;

/// Errors raised while configuring or driving a grid.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("unknown responsive break size '{0}' (expected none, xs, sm, md or lg)")]
    UnknownBreakSize(String),

    #[error("breakpoint for '{size}' must be a positive width, got {value}")]
    InvalidBreakpoint { size: BreakSize, value: String },

    #[error("invalid grid options: {0}")]
    Config(#[from] serde_json::Error),

    #[error("column '{0}' is defined more than once")]
    DuplicateColumn(String),

    #[error("no column named '{0}'")]
    UnknownColumn(String),

    #[error("grid has been destroyed")]
    Destroyed,
}

pub type Result<T> = std::result::Result<T, GridError>;
