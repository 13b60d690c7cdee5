#![forbid(unsafe_code)]

//! Configuration model for the chrome layer.
//!
//! Configuration is data, loaded once (typically from TOML) and validated
//! before anything is built from it. Validation repairs what it can and
//! warns about what it repaired; it never panics on author mistakes.
//!
//! # Invariants (post-validation)
//!
//! 1. `tabs.len() == tab_count`.
//! 2. At most one tab is declared `Selected`; when the author declared
//!    several, the first in sequence order survives and the rest are
//!    demoted to `Unlocked`.
//! 3. Popup, toggle, and locale entries with empty names are dropped.
//!
//! Validation is the single source of these rules: runtime paths build from
//! a validated config and do not re-check them.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ChromeError;

/// Declared state of a tab in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabState {
    Locked,
    #[default]
    Unlocked,
    Selected,
}

/// One tab declaration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabEntry {
    /// Initial state of the tab.
    #[serde(default)]
    pub state: TabState,
    /// Icon name, resolved through the icon collaborator at build time.
    #[serde(default)]
    pub icon: Option<String>,
    /// Localization key for the tab label.
    #[serde(default)]
    pub label_key: Option<String>,
}

/// Tab bar configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabBarConfig {
    /// Number of tabs the bar should hold.
    #[serde(default)]
    pub tab_count: usize,
    /// Per-tab declarations. Synced to `tab_count` during validation.
    #[serde(default)]
    pub tabs: Vec<TabEntry>,
}

impl TabBarConfig {
    /// Repair the tab list in place: sync length to `tab_count`, then
    /// demote every `Selected` declaration after the first.
    pub fn validate(&mut self) {
        if self.tabs.len() != self.tab_count {
            warn!(
                declared = self.tab_count,
                actual = self.tabs.len(),
                "tab list length does not match tab_count; syncing"
            );
            self.tabs.resize_with(self.tab_count, TabEntry::default);
        }

        let mut first_found = false;
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            if tab.state == TabState::Selected {
                if first_found {
                    warn!(index = i, "multiple selected tabs; demoting to unlocked");
                    tab.state = TabState::Unlocked;
                } else {
                    first_found = true;
                }
            }
        }
    }

    /// Index of the single tab declared `Selected`, if any.
    ///
    /// Only meaningful after [`validate`](Self::validate).
    #[must_use]
    pub fn initially_selected(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.state == TabState::Selected)
    }
}

/// One popup declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupEntry {
    /// Registry key for the popup.
    pub name: String,
    /// Whether closing plays an exit animation before finalizing.
    #[serde(default = "default_true")]
    pub close_animation: bool,
}

fn default_true() -> bool {
    true
}

/// Popup configuration: the set of popups the controller may open.
///
/// The widget factory for each name is registered in code; configuration
/// only declares which names exist and how they close.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopupConfig {
    #[serde(default)]
    pub popups: Vec<PopupEntry>,
}

impl PopupConfig {
    /// Drop entries with empty names.
    pub fn validate(&mut self) {
        self.popups.retain(|p| {
            if p.name.is_empty() {
                warn!("dropping popup entry with empty name");
                false
            } else {
                true
            }
        });
    }

    /// Look up a popup declaration by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&PopupEntry> {
        self.popups.iter().find(|p| p.name == name)
    }
}

/// Default state for a persisted toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleEntry {
    /// Unique toggle name; doubles as the preference key.
    pub name: String,
    #[serde(default)]
    pub default_state: bool,
}

/// A supported locale and its flag asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleEntry {
    /// Locale code, e.g. `"en"`, `"pl"`, `"de"`.
    pub code: String,
    /// Flag icon name for the language switcher.
    #[serde(default)]
    pub flag: Option<String>,
}

/// Root configuration for the chrome layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChromeConfig {
    #[serde(default)]
    pub tab_bar: TabBarConfig,
    #[serde(default)]
    pub popups: PopupConfig,
    #[serde(default)]
    pub toggles: Vec<ToggleEntry>,
    #[serde(default)]
    pub locales: Vec<LocaleEntry>,
}

impl ChromeConfig {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(source: &str) -> Result<Self, ChromeError> {
        let mut config: Self =
            toml::from_str(source).map_err(|e| ChromeError::ConfigParse(e.to_string()))?;
        config.validate();
        Ok(config)
    }

    /// Repair the whole configuration in place.
    pub fn validate(&mut self) {
        self.tab_bar.validate();
        self.popups.validate();
        self.toggles.retain(|t| {
            if t.name.is_empty() {
                warn!("dropping toggle entry with empty name");
                false
            } else {
                true
            }
        });
        self.locales.retain(|l| {
            if l.code.is_empty() {
                warn!("dropping locale entry with empty code");
                false
            } else {
                true
            }
        });
    }

    /// Default state for a named toggle, if declared.
    #[must_use]
    pub fn toggle_default(&self, name: &str) -> Option<bool> {
        self.toggles
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.default_state)
    }
}
