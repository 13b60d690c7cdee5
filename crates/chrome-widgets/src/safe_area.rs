#![forbid(unsafe_code)]

//! Safe-area tracking for the chrome layout.

use chrome_core::{AnchorBox, Rect, Size};
use tracing::debug;

/// Screen orientation, derived from screen dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Derive orientation from screen size. Square screens count as
    /// portrait.
    #[must_use]
    pub const fn of(screen: Size) -> Self {
        if screen.width > screen.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Caches the last applied safe area and recomputes anchors only when the
/// platform reports a change.
///
/// The platform collaborator polls or pushes `(safe, screen)` pairs every
/// frame; most of them are identical to the last. [`update`] answers
/// `Some` only when the anchors actually need re-applying.
///
/// [`update`]: SafeAreaLayout::update
#[derive(Debug, Default)]
pub struct SafeAreaLayout {
    last_safe: Option<Rect>,
    last_orientation: Option<Orientation>,
}

impl SafeAreaLayout {
    /// Create a layout tracker with no applied state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer the current safe area and screen size.
    ///
    /// Returns the anchors to apply when either the safe rectangle or the
    /// orientation changed since the last accepted update, `None`
    /// otherwise.
    pub fn update(&mut self, safe: Rect, screen: Size) -> Option<AnchorBox> {
        let orientation = Orientation::of(screen);
        if self.last_safe == Some(safe) && self.last_orientation == Some(orientation) {
            return None;
        }
        self.last_safe = Some(safe);
        self.last_orientation = Some(orientation);
        let anchors = AnchorBox::from_safe_area(safe, screen);
        debug!(?safe, ?orientation, "safe area changed");
        Some(anchors)
    }

    /// Last accepted orientation, if any update was accepted yet.
    #[must_use]
    pub fn orientation(&self) -> Option<Orientation> {
        self.last_orientation
    }

    /// Drop the cached state so the next offer is always accepted.
    pub fn invalidate(&mut self) {
        self.last_safe = None;
        self.last_orientation = None;
    }
}
