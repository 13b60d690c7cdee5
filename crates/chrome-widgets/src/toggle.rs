#![forbid(unsafe_code)]

//! Persisted on/off switch.

use chrome_core::{Transition, VisualDriver, VisualState, WidgetId};
use chrome_runtime::PrefsStore;
use tracing::debug;

/// A two-state switch whose value survives restarts.
///
/// The toggle name doubles as the preference key. On creation the saved
/// value wins over the configured default, and the visual jumps straight
/// to the resting state; only user-driven flips animate.
#[derive(Debug)]
pub struct ToggleSwitch {
    id: WidgetId,
    name: String,
    state: bool,
}

impl ToggleSwitch {
    /// Create a switch, restoring its saved value if one exists.
    pub fn new(
        name: impl Into<String>,
        default_state: bool,
        prefs: &dyn PrefsStore,
        driver: &mut dyn VisualDriver,
    ) -> Self {
        let name = name.into();
        let state = prefs.get_bool(&name).unwrap_or(default_state);
        let id = WidgetId::next();
        driver.set_state(id, resting(state));
        debug!(name = %name, state, "toggle initialized");
        Self { id, name, state }
    }

    /// Widget handle.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The toggle name, which is also its preference key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state
    }

    /// Flip the switch, animate the transition, and persist. Returns the
    /// new value.
    pub fn toggle(&mut self, prefs: &mut dyn PrefsStore, driver: &mut dyn VisualDriver) -> bool {
        self.set(!self.state, true, prefs, driver);
        self.state
    }

    /// Set the value directly.
    ///
    /// A no-op when the value is unchanged. `save` controls persistence;
    /// programmatic resets may skip it.
    pub fn set(
        &mut self,
        value: bool,
        save: bool,
        prefs: &mut dyn PrefsStore,
        driver: &mut dyn VisualDriver,
    ) {
        if value == self.state {
            return;
        }
        self.state = value;
        driver.play(
            self.id,
            if value {
                Transition::ToggleOn
            } else {
                Transition::ToggleOff
            },
        );
        if save {
            prefs.set_bool(&self.name, value);
        }
    }
}

const fn resting(state: bool) -> VisualState {
    if state { VisualState::On } else { VisualState::Off }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrome_core::RecordingDriver;
    use chrome_runtime::MemoryPrefs;

    #[test]
    fn default_applies_when_nothing_saved() {
        let prefs = MemoryPrefs::new();
        let mut driver = RecordingDriver::new();
        let toggle = ToggleSwitch::new("music", true, &prefs, &mut driver);

        assert!(toggle.is_on());
        assert_eq!(driver.set_states(), &[(toggle.id(), VisualState::On)]);
        assert!(driver.played().is_empty(), "creation must not animate");
    }

    #[test]
    fn saved_value_wins_over_default() {
        let mut prefs = MemoryPrefs::new();
        prefs.set_bool("music", false);
        let mut driver = RecordingDriver::new();

        let toggle = ToggleSwitch::new("music", true, &prefs, &mut driver);
        assert!(!toggle.is_on());
        assert_eq!(driver.set_states(), &[(toggle.id(), VisualState::Off)]);
    }

    #[test]
    fn toggle_flips_animates_and_persists() {
        let mut prefs = MemoryPrefs::new();
        let mut driver = RecordingDriver::new();
        let mut toggle = ToggleSwitch::new("music", true, &prefs, &mut driver);

        assert!(!toggle.toggle(&mut prefs, &mut driver));
        assert_eq!(driver.count(Transition::ToggleOff), 1);
        assert_eq!(prefs.get_bool("music"), Some(false));

        assert!(toggle.toggle(&mut prefs, &mut driver));
        assert_eq!(driver.count(Transition::ToggleOn), 1);
        assert_eq!(prefs.get_bool("music"), Some(true));
    }

    #[test]
    fn set_same_value_is_noop() {
        let mut prefs = MemoryPrefs::new();
        let mut driver = RecordingDriver::new();
        let mut toggle = ToggleSwitch::new("music", true, &prefs, &mut driver);

        toggle.set(true, true, &mut prefs, &mut driver);
        assert!(driver.played().is_empty());
        assert_eq!(prefs.get_bool("music"), None, "no spurious write");
    }

    #[test]
    fn unsaved_set_does_not_persist() {
        let mut prefs = MemoryPrefs::new();
        let mut driver = RecordingDriver::new();
        let mut toggle = ToggleSwitch::new("music", true, &prefs, &mut driver);

        toggle.set(false, false, &mut prefs, &mut driver);
        assert!(!toggle.is_on());
        assert_eq!(driver.count(Transition::ToggleOff), 1);
        assert_eq!(prefs.get_bool("music"), None);
    }
}
