#![forbid(unsafe_code)]

//! Popup lifecycle controller.

use ahash::AHashMap;
use chrome_core::{ChromeError, PopupConfig, VisualDriver, WidgetId};
use tracing::{debug, info, warn};

use super::backdrop::BackdropController;
use super::state::{CloseOutcome, Popup, PopupWidget};
use crate::registry::WidgetRegistry;

/// Builds the widget for a named popup.
pub type PopupFactory = Box<dyn Fn(WidgetId) -> Box<dyn PopupWidget>>;

/// Owns every live popup and drives the open/close lifecycle.
///
/// Configuration declares which popup names exist and whether closing
/// them animates; factories for the actual widgets are registered in
/// code. Opening an already-open popup is a no-op returning the live
/// handle, except while that popup is closing, which is rejected: the
/// name is unavailable until the close finishes.
pub struct PopupController {
    config: PopupConfig,
    factories: AHashMap<String, PopupFactory>,
    registry: WidgetRegistry<Popup>,
    backdrop: BackdropController,
}

impl PopupController {
    /// Create a controller over validated popup configuration.
    #[must_use]
    pub fn new(config: PopupConfig) -> Self {
        Self {
            config,
            factories: AHashMap::new(),
            registry: WidgetRegistry::new(),
            backdrop: BackdropController::new(),
        }
    }

    /// Register the widget factory for a popup name. Re-registering a
    /// name replaces the factory; live popups are unaffected.
    pub fn register_factory(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(WidgetId) -> Box<dyn PopupWidget> + 'static,
    ) {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Show the popup named `name`.
    ///
    /// Returns the live handle, freshly opened or existing. Fails with
    /// [`ChromeError::ConfigurationMissing`] for undeclared names,
    /// [`ChromeError::NotFound`] when no factory is registered, and
    /// [`ChromeError::NotYetAvailable`] while a previous instance is
    /// still closing.
    pub fn show(
        &mut self,
        name: &str,
        driver: &mut dyn VisualDriver,
    ) -> Result<WidgetId, ChromeError> {
        let entry = self
            .config
            .find(name)
            .ok_or_else(|| ChromeError::ConfigurationMissing(name.to_owned()))?;

        if let Some(existing) = self.registry.get(name) {
            if existing.is_closing() {
                warn!(name, "show rejected while close in flight");
                return Err(ChromeError::NotYetAvailable(name.to_owned()));
            }
            debug!(name, id = %existing.id(), "popup already open");
            return Ok(existing.id());
        }

        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ChromeError::NotFound(name.to_owned()))?;

        let close_animation = entry.close_animation;
        let id = self
            .registry
            .open(name, |id| Popup::new(name, id, close_animation, factory(id)))?;
        self.backdrop.acquire(driver);
        if let Some(popup) = self.registry.get_mut_by_id(id) {
            popup.on_show(driver);
        }
        info!(name, %id, "popup shown");
        Ok(id)
    }

    /// Request a close of the popup named `name`.
    ///
    /// Idempotent: an absent name is a no-op returning `None`. An
    /// unanimated popup is finalized before this returns; an animated one
    /// is latched and finalized when
    /// [`on_transition_complete`](Self::on_transition_complete) fires.
    pub fn close(&mut self, name: &str, driver: &mut dyn VisualDriver) -> Option<CloseOutcome> {
        let popup = self.registry.get_mut(name)?;
        let outcome = popup.request_close(driver);
        if outcome == CloseOutcome::ReadyToFinalize {
            if let Some(popup) = self.registry.close(name) {
                popup.finalize();
                self.backdrop.release(driver);
            }
            info!(name, "popup closed");
        }
        Some(outcome)
    }

    /// The driver finished a transition on `id`.
    ///
    /// Only a popup whose close is latched is finalized here; completions
    /// for anything else are ignored.
    pub fn on_transition_complete(&mut self, id: WidgetId, driver: &mut dyn VisualDriver) {
        let Some(popup) = self.registry.get_mut_by_id(id) else {
            return;
        };
        if !popup.is_closing() {
            return;
        }
        let name = popup.name().to_owned();
        if let Some(popup) = self.registry.close(&name) {
            popup.finalize();
            self.backdrop.release(driver);
            info!(name = %name, %id, "popup closed after animation");
        }
    }

    /// Reconcile a popup destroyed outside the close path.
    ///
    /// The registry entry and backdrop hold are released; the closed hook
    /// does not run, since the widget is already gone.
    pub fn notify_destroyed(&mut self, id: WidgetId, driver: &mut dyn VisualDriver) {
        if let Some(name) = self.registry.notify_destroyed(id) {
            warn!(name = %name, %id, "popup destroyed out of band");
            self.backdrop.release(driver);
        }
    }

    /// Request a close of every live popup.
    ///
    /// Each popup goes through the same latching path as
    /// [`close`](Self::close): unanimated popups finalize inline, animated
    /// ones stay registered until their completion callback, and popups
    /// already mid-close are left alone.
    pub fn close_all(&mut self, driver: &mut dyn VisualDriver) {
        let keys = self.registry.keys();
        let count = keys.len();
        for key in keys {
            self.close(&key, driver);
        }
        if count > 0 {
            info!(count, "close requested for all popups");
        }
    }

    /// Whether `name` has a live popup (including one mid-close).
    #[must_use]
    pub fn is_open(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Whether `name` has a close in flight.
    #[must_use]
    pub fn is_closing(&self, name: &str) -> bool {
        self.registry.get(name).is_some_and(Popup::is_closing)
    }

    /// Number of live popups.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.registry.len()
    }

    /// Depth of the shared backdrop, for diagnostics.
    #[must_use]
    pub fn backdrop_depth(&self) -> usize {
        self.backdrop.depth()
    }
}

impl std::fmt::Debug for PopupController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopupController")
            .field("open", &self.registry.len())
            .field("backdrop_depth", &self.backdrop.depth())
            .finish()
    }
}
