#![forbid(unsafe_code)]

//! Visual-transition contract between the coordination layer and whatever
//! actually animates widgets.
//!
//! The coordination layer never animates anything itself. State machines
//! request [`Transition`]s (animated) or [`VisualState`] jumps (instant,
//! used when building widgets from configuration) through a
//! [`VisualDriver`], and the driver decides what they look like.
//! Transitions that gate further lifecycle work (popup close) are completed
//! by the driver calling back into the owning controller; the request
//! itself is fire-and-forget.

use crate::handle::WidgetId;

/// A named visual transition requested by a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Tab item enters the selected look.
    Select,
    /// Tab item leaves the selected look.
    Unselect,
    /// Feedback shake/flash for activating a locked item.
    LockedFeedback,
    /// Feedback for re-activating the already-selected item.
    ReselectedFeedback,
    /// Popup close animation.
    PlayOut,
    /// Toggle switches on.
    ToggleOn,
    /// Toggle switches off.
    ToggleOff,
    /// Backdrop tint fades in.
    BackdropShow,
    /// Backdrop tint fades out.
    BackdropHide,
}

impl Transition {
    /// Stable clip name for this transition, as the animation collaborator
    /// sees it.
    #[must_use]
    pub const fn clip_name(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Unselect => "unselect",
            Self::LockedFeedback => "locked_feedback",
            Self::ReselectedFeedback => "reselected_feedback",
            Self::PlayOut => "play_out",
            Self::ToggleOn => "on",
            Self::ToggleOff => "off",
            Self::BackdropShow => "backdrop_show",
            Self::BackdropHide => "backdrop_hide",
        }
    }
}

/// A resting visual state a widget can be jumped to without animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualState {
    Locked,
    Unlocked,
    Selected,
    On,
    Off,
}

impl VisualState {
    /// Stable state name for the animation collaborator.
    #[must_use]
    pub const fn state_name(self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
            Self::Selected => "selected",
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

/// Driver for visual transitions.
///
/// Implementations must tolerate any `(widget, transition)` pair, including
/// handles they have never seen: an unknown handle is a presentation-layer
/// concern, never a reason to fail the state machine that asked.
pub trait VisualDriver {
    /// Play a transition on a widget. Fire-and-forget.
    fn play(&mut self, widget: WidgetId, transition: Transition);

    /// Jump a widget to a resting state without animating.
    ///
    /// Used when (re)building widgets from configuration, where the
    /// initial state must appear instantly.
    fn set_state(&mut self, widget: WidgetId, state: VisualState);
}

/// Driver that discards every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDriver;

impl VisualDriver for NullDriver {
    fn play(&mut self, _widget: WidgetId, _transition: Transition) {}
    fn set_state(&mut self, _widget: WidgetId, _state: VisualState) {}
}

/// Test driver that records every request in order.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    played: Vec<(WidgetId, Transition)>,
    set: Vec<(WidgetId, VisualState)>,
}

impl RecordingDriver {
    /// Create an empty recording driver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All `play` requests, in order.
    #[must_use]
    pub fn played(&self) -> &[(WidgetId, Transition)] {
        &self.played
    }

    /// All `set_state` requests, in order.
    #[must_use]
    pub fn set_states(&self) -> &[(WidgetId, VisualState)] {
        &self.set
    }

    /// Count of `play` requests for a given transition, any widget.
    #[must_use]
    pub fn count(&self, transition: Transition) -> usize {
        self.played.iter().filter(|(_, t)| *t == transition).count()
    }

    /// Drop all recorded requests.
    pub fn clear(&mut self) {
        self.played.clear();
        self.set.clear();
    }
}

impl VisualDriver for RecordingDriver {
    fn play(&mut self, widget: WidgetId, transition: Transition) {
        self.played.push((widget, transition));
    }

    fn set_state(&mut self, widget: WidgetId, state: VisualState) {
        self.set.push((widget, state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_names_are_stable() {
        assert_eq!(Transition::Select.clip_name(), "select");
        assert_eq!(Transition::PlayOut.clip_name(), "play_out");
        assert_eq!(Transition::BackdropHide.clip_name(), "backdrop_hide");
        assert_eq!(VisualState::Locked.state_name(), "locked");
    }

    #[test]
    fn recording_driver_keeps_order() {
        let mut driver = RecordingDriver::new();
        let a = WidgetId::next();
        let b = WidgetId::next();

        driver.play(a, Transition::Select);
        driver.play(b, Transition::Unselect);

        assert_eq!(
            driver.played(),
            &[(a, Transition::Select), (b, Transition::Unselect)]
        );
        assert_eq!(driver.count(Transition::Select), 1);
    }

    #[test]
    fn set_state_is_tracked_separately() {
        let mut driver = RecordingDriver::new();
        let a = WidgetId::next();

        driver.set_state(a, VisualState::On);
        assert!(driver.played().is_empty());
        assert_eq!(driver.set_states(), &[(a, VisualState::On)]);
    }

    #[test]
    fn clear_drops_history() {
        let mut driver = RecordingDriver::new();
        let a = WidgetId::next();
        driver.play(a, Transition::Select);
        driver.set_state(a, VisualState::Selected);

        driver.clear();
        assert!(driver.played().is_empty());
        assert!(driver.set_states().is_empty());
    }
}
