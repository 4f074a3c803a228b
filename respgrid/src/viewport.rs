//! Viewport width providers.

use std::sync::{Arc, RwLock};

/// Source of the current viewport width.
///
/// `None` means no viewport is available (headless context); grids built
/// against such a provider run with responsive behavior disabled.
pub trait Viewport: Send + Sync {
    fn width(&self) -> Option<u32>;
}

/// Width of the controlling terminal, in columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalViewport;

impl Viewport for TerminalViewport {
    fn width(&self) -> Option<u32> {
        tuidom::terminal::size().map(|(width, _)| u32::from(width))
    }
}

/// Settable width shared between clones.
///
/// Used for headless rendering and to drive resize sequences in tests.
#[derive(Debug, Clone)]
pub struct FixedViewport {
    width: Arc<RwLock<Option<u32>>>,
}

impl FixedViewport {
    pub fn new(width: u32) -> Self {
        Self {
            width: Arc::new(RwLock::new(Some(width))),
        }
    }

    /// A provider that never reports a width.
    pub fn unavailable() -> Self {
        Self {
            width: Arc::new(RwLock::new(None)),
        }
    }

    pub fn set_width(&self, width: u32) {
        let mut guard = self.width.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(width);
    }
}

impl Viewport for FixedViewport {
    fn width(&self) -> Option<u32> {
        self.width
            .read()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }
}

impl<V: Viewport + ?Sized> Viewport for Arc<V> {
    fn width(&self) -> Option<u32> {
        (**self).width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_viewport_shares_width_between_clones() {
        let viewport = FixedViewport::new(80);
        let handle = viewport.clone();
        handle.set_width(120);
        assert_eq!(viewport.width(), Some(120));
        assert_eq!(FixedViewport::unavailable().width(), None);
    }

    #[test]
    fn test_set_width_recovers_from_poisoned_lock() {
        let viewport = FixedViewport::new(80);
        let shared = Arc::clone(&viewport.width);
        let _ = std::thread::spawn(move || {
            let _guard = shared.write().unwrap();
            panic!("poison the width lock");
        })
        .join();
        assert!(viewport.width.is_poisoned());

        viewport.set_width(42);
        assert_eq!(viewport.width(), Some(42));
    }
}
