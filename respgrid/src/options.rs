//! Construction-time grid options.

use serde::Deserialize;
use serde_json::Value;

use crate::breakpoint::{BreakSize, Breakpoints};
use crate::error::{GridError, Result};

/// Options recognized when building a [`ResponsiveGrid`](crate::ResponsiveGrid).
///
/// All fields are optional. Options can be built in code or parsed from the
/// JSON shape used by host pages:
///
/// ```
/// use respgrid::{BreakSize, GridOptions};
///
/// let options = GridOptions::from_json(r#"{
///     "smBreakpoint": 820,
///     "responsiveBreakSize": "sm",
///     "defaultColumnsToBeEditable": true
/// }"#).unwrap();
/// let config = options.resolve().unwrap();
/// assert_eq!(config.break_size, BreakSize::Sm);
/// assert_eq!(config.threshold, Some(820));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOptions {
    xs_breakpoint: Option<Value>,
    sm_breakpoint: Option<Value>,
    md_breakpoint: Option<Value>,
    lg_breakpoint: Option<Value>,
    responsive_break_size: Option<BreakSize>,
    default_columns_to_be_editable: Option<bool>,
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override the threshold for one tier. `BreakSize::None` is ignored.
    pub fn breakpoint(mut self, size: BreakSize, width: u32) -> Self {
        let value = Some(Value::from(width));
        match size {
            BreakSize::None => {}
            BreakSize::Xs => self.xs_breakpoint = value,
            BreakSize::Sm => self.sm_breakpoint = value,
            BreakSize::Md => self.md_breakpoint = value,
            BreakSize::Lg => self.lg_breakpoint = value,
        }
        self
    }

    /// Select the active tier.
    pub fn break_size(mut self, size: BreakSize) -> Self {
        self.responsive_break_size = Some(size);
        self
    }

    /// Editability for columns that don't set their own.
    pub fn default_columns_editable(mut self, editable: bool) -> Self {
        self.default_columns_to_be_editable = Some(editable);
        self
    }

    /// Resolve into the immutable configuration carried by one grid.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let mut breakpoints = Breakpoints::default();

        let overrides = [
            (BreakSize::Xs, &self.xs_breakpoint),
            (BreakSize::Sm, &self.sm_breakpoint),
            (BreakSize::Md, &self.md_breakpoint),
            (BreakSize::Lg, &self.lg_breakpoint),
        ];
        for (size, value) in overrides {
            if let Some(value) = value {
                breakpoints.set(size, parse_threshold(size, value)?);
            }
        }

        let break_size = self.responsive_break_size.unwrap_or_default();

        Ok(ResolvedConfig {
            breakpoints,
            break_size,
            threshold: breakpoints.threshold(break_size),
            default_editable: self.default_columns_to_be_editable.unwrap_or(false),
        })
    }
}

/// Accepts positive integers, either as JSON numbers or numeric strings.
fn parse_threshold(size: BreakSize, value: &Value) -> Result<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };

    match parsed {
        Some(width) if width > 0 => Ok(width),
        _ => Err(GridError::InvalidBreakpoint {
            size,
            value: value.to_string(),
        }),
    }
}

/// Configuration resolved once per grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub breakpoints: Breakpoints,
    pub break_size: BreakSize,
    /// Active threshold; `None` disables responsive behavior.
    pub threshold: Option<u32>,
    pub default_editable: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let breakpoints = Breakpoints::default();
        let break_size = BreakSize::default();
        Self {
            breakpoints,
            break_size,
            threshold: breakpoints.threshold(break_size),
            default_editable: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_to_extra_small() {
        let config = GridOptions::new().resolve().unwrap();
        assert_eq!(config, ResolvedConfig::default());
        assert_eq!(config.break_size, BreakSize::Xs);
        assert_eq!(config.threshold, Some(768));
        assert!(!config.default_editable);
    }

    #[test]
    fn test_override_only_touches_own_tier() {
        let config = GridOptions::new()
            .breakpoint(BreakSize::Md, 1200)
            .break_size(BreakSize::Md)
            .resolve()
            .unwrap();
        assert_eq!(config.threshold, Some(1200));
        assert_eq!(config.breakpoints.xs, 768);
        assert_eq!(config.breakpoints.sm, 991);
        assert_eq!(config.breakpoints.lg, 991);
    }

    #[test]
    fn test_none_disables_threshold() {
        let config = GridOptions::new()
            .break_size(BreakSize::None)
            .resolve()
            .unwrap();
        assert_eq!(config.threshold, None);
    }

    #[test]
    fn test_json_keys() {
        let options = GridOptions::from_json(
            r#"{"xsBreakpoint": 500, "lgBreakpoint": "1400", "responsiveBreakSize": "lg",
                "defaultColumnsToBeEditable": true, "columns": []}"#,
        )
        .unwrap();
        let config = options.resolve().unwrap();
        assert_eq!(config.breakpoints.xs, 500);
        assert_eq!(config.threshold, Some(1400));
        assert!(config.default_editable);
    }

    #[test]
    fn test_non_numeric_breakpoint_fails_fast() {
        let options = GridOptions::from_json(r#"{"smBreakpoint": "wide"}"#).unwrap();
        let err = options.resolve().unwrap_err();
        assert!(matches!(
            err,
            GridError::InvalidBreakpoint { size: BreakSize::Sm, .. }
        ));
    }

    #[test]
    fn test_zero_and_negative_breakpoints_rejected() {
        for json in [r#"{"xsBreakpoint": 0}"#, r#"{"xsBreakpoint": -5}"#, r#"{"xsBreakpoint": 7.5}"#] {
            let err = GridOptions::from_json(json).unwrap().resolve().unwrap_err();
            assert!(matches!(err, GridError::InvalidBreakpoint { .. }), "{json}");
        }
    }

    #[test]
    fn test_unknown_break_size_in_json() {
        let err = GridOptions::from_json(r#"{"responsiveBreakSize": "huge"}"#).unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
        assert!(err.to_string().contains("huge"));
    }
}
