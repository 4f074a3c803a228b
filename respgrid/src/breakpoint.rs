//! Named size tiers and their width thresholds.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::GridError;

/// Named size tier, after Bootstrap's grid tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum BreakSize {
    /// Responsive behavior disabled.
    None,
    #[default]
    Xs,
    Sm,
    Md,
    Lg,
}

impl BreakSize {
    pub const ALL: [BreakSize; 5] = [Self::None, Self::Xs, Self::Sm, Self::Md, Self::Lg];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl fmt::Display for BreakSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakSize {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "xs" | "extra-small" => Ok(Self::Xs),
            "sm" | "small" => Ok(Self::Sm),
            "md" | "medium" => Ok(Self::Md),
            "lg" | "large" => Ok(Self::Lg),
            _ => Err(GridError::UnknownBreakSize(s.to_string())),
        }
    }
}

impl TryFrom<String> for BreakSize {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Width threshold per size tier.
///
/// Each grid resolves its own table; the defaults are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: 768,
            sm: 991,
            md: 991,
            lg: 991,
        }
    }
}

impl Breakpoints {
    /// Threshold for a tier; `BreakSize::None` has none.
    pub fn threshold(&self, size: BreakSize) -> Option<u32> {
        match size {
            BreakSize::None => None,
            BreakSize::Xs => Some(self.xs),
            BreakSize::Sm => Some(self.sm),
            BreakSize::Md => Some(self.md),
            BreakSize::Lg => Some(self.lg),
        }
    }

    pub(crate) fn set(&mut self, size: BreakSize, value: u32) {
        match size {
            BreakSize::None => {}
            BreakSize::Xs => self.xs = value,
            BreakSize::Sm => self.sm = value,
            BreakSize::Md => self.md = value,
            BreakSize::Lg => self.lg = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_names() {
        assert_eq!("xs".parse::<BreakSize>().unwrap(), BreakSize::Xs);
        assert_eq!("extra-small".parse::<BreakSize>().unwrap(), BreakSize::Xs);
        assert_eq!("Small".parse::<BreakSize>().unwrap(), BreakSize::Sm);
        assert_eq!("md".parse::<BreakSize>().unwrap(), BreakSize::Md);
        assert_eq!("large".parse::<BreakSize>().unwrap(), BreakSize::Lg);
        assert_eq!("none".parse::<BreakSize>().unwrap(), BreakSize::None);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "xxl".parse::<BreakSize>().unwrap_err();
        assert!(matches!(err, GridError::UnknownBreakSize(name) if name == "xxl"));
    }

    #[test]
    fn test_default_thresholds() {
        let table = Breakpoints::default();
        assert_eq!(table.threshold(BreakSize::None), None);
        assert_eq!(table.threshold(BreakSize::Xs), Some(768));
        assert_eq!(table.threshold(BreakSize::Sm), Some(991));
        assert_eq!(table.threshold(BreakSize::Md), Some(991));
        assert_eq!(table.threshold(BreakSize::Lg), Some(991));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for size in BreakSize::ALL {
            assert_eq!(size.to_string().parse::<BreakSize>().unwrap(), size);
        }
    }
}
