#![forbid(unsafe_code)]

//! Shared backdrop tint behind popups.

use chrome_core::{Transition, VisualDriver, WidgetId};
use tracing::warn;

/// Depth-counted backdrop controller.
///
/// Several popups share one tint layer. The tint shows when the first
/// popup opens and hides when the last one goes away; intermediate
/// acquire/release pairs only move the counter.
#[derive(Debug)]
pub struct BackdropController {
    id: WidgetId,
    depth: usize,
}

impl Default for BackdropController {
    fn default() -> Self {
        Self::new()
    }
}

impl BackdropController {
    /// Create a controller with its own tint-layer handle and zero depth.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            depth: 0,
        }
    }

    /// Handle of the tint layer.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Number of active holders.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// A popup became visible. Shows the tint on the 0 → 1 edge.
    pub fn acquire(&mut self, driver: &mut dyn VisualDriver) {
        self.depth += 1;
        if self.depth == 1 {
            driver.play(self.id, Transition::BackdropShow);
        }
    }

    /// A popup went away. Hides the tint on the 1 → 0 edge.
    ///
    /// An unbalanced release is reported and absorbed; the counter never
    /// wraps.
    pub fn release(&mut self, driver: &mut dyn VisualDriver) {
        match self.depth {
            0 => warn!("backdrop release without matching acquire"),
            1 => {
                self.depth = 0;
                driver.play(self.id, Transition::BackdropHide);
            }
            _ => self.depth -= 1,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use chrome_core::RecordingDriver;

    #[test]
    fn tint_shows_on_first_acquire_only() {
        let mut driver = RecordingDriver::new();
        let mut backdrop = BackdropController::new();

        backdrop.acquire(&mut driver);
        backdrop.acquire(&mut driver);
        assert_eq!(backdrop.depth(), 2);
        assert_eq!(driver.count(Transition::BackdropShow), 1);
    }

    #[test]
    fn tint_hides_on_last_release_only() {
        let mut driver = RecordingDriver::new();
        let mut backdrop = BackdropController::new();
        backdrop.acquire(&mut driver);
        backdrop.acquire(&mut driver);

        backdrop.release(&mut driver);
        assert_eq!(driver.count(Transition::BackdropHide), 0);
        backdrop.release(&mut driver);
        assert_eq!(driver.count(Transition::BackdropHide), 1);
        assert_eq!(backdrop.depth(), 0);
    }

    #[test]
    fn unbalanced_release_is_absorbed() {
        let mut driver = RecordingDriver::new();
        let mut backdrop = BackdropController::new();

        backdrop.release(&mut driver);
        assert_eq!(backdrop.depth(), 0);
        assert_eq!(driver.count(Transition::BackdropHide), 0);
    }
}
