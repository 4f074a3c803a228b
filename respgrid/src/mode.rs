use std::fmt;

/// Grid-wide rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Standard table with a header row.
    #[default]
    Expanded,
    /// Stacked cards; every cell carries its own column label.
    Condensed,
}

impl LayoutMode {
    /// Condensed iff `width` is strictly below `threshold`.
    pub fn for_width(width: u32, threshold: u32) -> Self {
        if width < threshold {
            Self::Condensed
        } else {
            Self::Expanded
        }
    }

    pub fn is_condensed(self) -> bool {
        self == Self::Condensed
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expanded => f.write_str("expanded"),
            Self::Condensed => f.write_str("condensed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_is_condensed() {
        assert_eq!(LayoutMode::for_width(600, 768), LayoutMode::Condensed);
        assert_eq!(LayoutMode::for_width(0, 768), LayoutMode::Condensed);
        assert_eq!(LayoutMode::for_width(767, 768), LayoutMode::Condensed);
    }

    #[test]
    fn test_threshold_boundary_is_expanded() {
        assert_eq!(LayoutMode::for_width(768, 768), LayoutMode::Expanded);
        assert_eq!(LayoutMode::for_width(1024, 768), LayoutMode::Expanded);
    }

    #[test]
    fn test_exhaustive_small_range() {
        for threshold in 1..40 {
            for width in 0..80 {
                let mode = LayoutMode::for_width(width, threshold);
                assert_eq!(mode.is_condensed(), width < threshold);
            }
        }
    }
}
