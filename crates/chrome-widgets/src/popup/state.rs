#![forbid(unsafe_code)]

//! Per-popup close lifecycle.

use chrome_core::{Transition, VisualDriver, WidgetId};
use tracing::debug;

/// Behavior hooks a popup implementation provides.
///
/// Implementations hold whatever content state the popup needs; the
/// lifecycle (open exclusivity, animation-gated close, finalization
/// exactly once) is owned by [`Popup`] and the controller.
pub trait PopupWidget {
    /// Called once, after the popup is registered and visible.
    fn on_show(&mut self, _driver: &mut dyn VisualDriver) {}

    /// Called exactly once, when the popup is finalized. The widget is
    /// dropped immediately afterwards.
    fn on_closed(&mut self) {}
}

/// What a close request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// A close was already in flight; the request changed nothing.
    AlreadyClosing,
    /// The exit animation was started; finalization happens when the
    /// driver reports completion.
    AwaitingAnimation,
    /// No exit animation is configured; the popup can be finalized now.
    ReadyToFinalize,
}

/// A live popup: name, handle, close latch, and the widget behind it.
///
/// The `closing` latch is monotonic. Once a close begins the popup never
/// returns to an interactive state; repeat close requests are absorbed.
pub struct Popup {
    name: String,
    id: WidgetId,
    close_animation: bool,
    closing: bool,
    widget: Box<dyn PopupWidget>,
}

impl Popup {
    /// Wrap a widget in lifecycle state.
    pub fn new(
        name: impl Into<String>,
        id: WidgetId,
        close_animation: bool,
        widget: Box<dyn PopupWidget>,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            close_animation,
            closing: false,
            widget,
        }
    }

    /// Registry key of this popup.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Widget handle.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Whether a close is in flight.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Run the show hook.
    pub fn on_show(&mut self, driver: &mut dyn VisualDriver) {
        self.widget.on_show(driver);
    }

    /// Request a close.
    ///
    /// Latches `closing` and, when an exit animation is configured, plays
    /// it. Idempotent: a popup already closing reports
    /// [`CloseOutcome::AlreadyClosing`] and plays nothing.
    pub fn request_close(&mut self, driver: &mut dyn VisualDriver) -> CloseOutcome {
        if self.closing {
            return CloseOutcome::AlreadyClosing;
        }
        self.closing = true;
        if self.close_animation {
            driver.play(self.id, Transition::PlayOut);
            debug!(name = %self.name, id = %self.id, "popup close animation started");
            CloseOutcome::AwaitingAnimation
        } else {
            CloseOutcome::ReadyToFinalize
        }
    }

    /// Finalize: run the closed hook and consume the popup.
    pub fn finalize(mut self) {
        debug!(name = %self.name, id = %self.id, "popup finalized");
        self.widget.on_closed();
    }
}

impl std::fmt::Debug for Popup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popup")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("closing", &self.closing)
            .finish()
    }
}
