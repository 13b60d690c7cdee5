#![forbid(unsafe_code)]

//! Tab bar: per-item state machines plus a selection coordinator.
//!
//! The bar is built from validated configuration. Icon names and label
//! keys resolve through collaborators at build time; a miss is reported
//! and the item keeps its placeholder. Configuration changes rebuild the
//! bar instead of mutating live items.

mod coordinator;
mod item;

pub use coordinator::SelectionCoordinator;
pub use item::{Activation, ItemState, SelectableItem};

use chrome_core::{IconResolver, TabBarConfig, VisualDriver};
use chrome_i18n::StringCatalog;
use chrome_runtime::Subscription;
use tracing::{info, warn};

/// Builds and owns the tab bar.
pub struct TabBarController {
    config: TabBarConfig,
    coordinator: SelectionCoordinator,
}

impl TabBarController {
    /// Build a tab bar from validated configuration.
    ///
    /// Each entry becomes a [`SelectableItem`] in its declared state.
    /// Missing icons or label keys are warned about and left unset.
    pub fn build(
        config: TabBarConfig,
        icons: &dyn IconResolver,
        catalog: &StringCatalog,
        locale: &str,
        driver: &mut dyn VisualDriver,
    ) -> Self {
        let coordinator = build_items(&config, icons, catalog, locale, driver);
        info!(count = coordinator.len(), "tab bar built");
        Self {
            config,
            coordinator,
        }
    }

    /// Replace the bar with one built from new configuration.
    ///
    /// Existing items are dropped wholesale; selection state comes from
    /// the new configuration, not the old bar.
    pub fn rebuild(
        &mut self,
        config: TabBarConfig,
        icons: &dyn IconResolver,
        catalog: &StringCatalog,
        locale: &str,
        driver: &mut dyn VisualDriver,
    ) {
        info!(count = config.tab_count, "tab bar rebuilding");
        self.coordinator = build_items(&config, icons, catalog, locale, driver);
        self.config = config;
    }

    /// Re-resolve every label for a new locale. Icons are locale-independent
    /// and untouched.
    pub fn relocalize(&mut self, catalog: &StringCatalog, locale: &str) {
        for (index, entry) in self.config.tabs.clone().iter().enumerate() {
            let Some(key) = entry.label_key.as_deref() else {
                continue;
            };
            match catalog.resolve(locale, key) {
                Some(label) => {
                    let label = label.to_owned();
                    if let Some(item) = self.coordinator.item_mut(index) {
                        item.set_label(label);
                    }
                }
                None => warn!(key, locale, "label key unresolved"),
            }
        }
    }

    /// Handle a user activation on the tab at `index`.
    pub fn activate(&mut self, index: usize, driver: &mut dyn VisualDriver) -> Option<Activation> {
        self.coordinator.activate(index, driver)
    }

    /// Currently selected index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.coordinator.selected()
    }

    /// Observe selection changes.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(&Option<usize>) + 'static) -> Subscription {
        self.coordinator.subscribe(callback)
    }

    /// The items, in configuration order.
    #[must_use]
    pub fn items(&self) -> &[SelectableItem] {
        self.coordinator.items()
    }
}

fn build_items(
    config: &TabBarConfig,
    icons: &dyn IconResolver,
    catalog: &StringCatalog,
    locale: &str,
    driver: &mut dyn VisualDriver,
) -> SelectionCoordinator {
    let mut items = Vec::with_capacity(config.tabs.len());
    for entry in &config.tabs {
        let mut item = SelectableItem::new(entry.state.into(), driver);
        if let Some(name) = entry.icon.as_deref() {
            match icons.resolve(name) {
                Some(icon) => item.set_icon(icon),
                None => warn!(name, "icon unresolved"),
            }
        }
        if let Some(key) = entry.label_key.as_deref() {
            match catalog.resolve(locale, key) {
                Some(label) => item.set_label(label),
                None => warn!(key, locale, "label key unresolved"),
            }
        }
        items.push(item);
    }
    SelectionCoordinator::build(items, driver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrome_core::{MapIconResolver, RecordingDriver, TabEntry, TabState};
    use chrome_i18n::LocaleStrings;

    fn config() -> TabBarConfig {
        let mut config = TabBarConfig {
            tab_count: 3,
            tabs: vec![
                TabEntry {
                    state: TabState::Selected,
                    icon: Some("home".into()),
                    label_key: Some("tab.home".into()),
                },
                TabEntry {
                    state: TabState::Unlocked,
                    icon: Some("shop".into()),
                    label_key: Some("tab.shop".into()),
                },
                TabEntry {
                    state: TabState::Locked,
                    icon: Some("missing".into()),
                    label_key: Some("tab.missing".into()),
                },
            ],
        };
        config.validate();
        config
    }

    fn icons() -> MapIconResolver {
        [("home", 1), ("shop", 2)]
            .into_iter()
            .map(|(name, id)| (name.to_owned(), chrome_core::IconId(id)))
            .collect()
    }

    fn catalog() -> StringCatalog {
        let mut en = LocaleStrings::new();
        en.insert("tab.home", "Home");
        en.insert("tab.shop", "Shop");
        let mut pl = LocaleStrings::new();
        pl.insert("tab.home", "Główna");
        pl.insert("tab.shop", "Sklep");

        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        catalog.add_locale("pl", pl);
        catalog
    }

    #[test]
    fn build_resolves_icons_and_labels() {
        let mut driver = RecordingDriver::new();
        let bar = TabBarController::build(config(), &icons(), &catalog(), "en", &mut driver);

        assert_eq!(bar.items().len(), 3);
        assert_eq!(bar.items()[0].label(), Some("Home"));
        assert_eq!(bar.items()[0].icon(), Some(chrome_core::IconId(1)));
        assert_eq!(bar.selected(), Some(0));

        // Unresolvable names leave placeholders, never fail the build.
        assert_eq!(bar.items()[2].icon(), None);
        assert_eq!(bar.items()[2].label(), None);
    }

    #[test]
    fn build_jumps_states_without_animating() {
        let mut driver = RecordingDriver::new();
        let _bar = TabBarController::build(config(), &icons(), &catalog(), "en", &mut driver);
        assert_eq!(driver.set_states().len(), 3);
        assert!(driver.played().is_empty());
    }

    #[test]
    fn activation_flows_through() {
        let mut driver = RecordingDriver::new();
        let mut bar = TabBarController::build(config(), &icons(), &catalog(), "en", &mut driver);

        assert_eq!(
            bar.activate(1, &mut driver),
            Some(Activation::BecameSelected)
        );
        assert_eq!(bar.selected(), Some(1));
        assert_eq!(
            bar.activate(2, &mut driver),
            Some(Activation::LockedFeedback)
        );
        assert_eq!(bar.selected(), Some(1));
    }

    #[test]
    fn relocalize_swaps_labels_in_place() {
        let mut driver = RecordingDriver::new();
        let mut bar = TabBarController::build(config(), &icons(), &catalog(), "en", &mut driver);
        bar.activate(1, &mut driver);

        bar.relocalize(&catalog(), "pl");
        assert_eq!(bar.items()[0].label(), Some("Główna"));
        assert_eq!(bar.items()[1].label(), Some("Sklep"));
        // Selection survives a relocalization.
        assert_eq!(bar.selected(), Some(1));
    }

    #[test]
    fn rebuild_replaces_items() {
        let mut driver = RecordingDriver::new();
        let mut bar = TabBarController::build(config(), &icons(), &catalog(), "en", &mut driver);
        bar.activate(1, &mut driver);
        let old_id = bar.items()[0].id();

        let mut next = TabBarConfig {
            tab_count: 2,
            tabs: vec![TabEntry::default(), TabEntry::default()],
        };
        next.validate();
        bar.rebuild(next, &icons(), &catalog(), "en", &mut driver);

        assert_eq!(bar.items().len(), 2);
        assert_eq!(bar.selected(), None);
        assert_ne!(bar.items()[0].id(), old_id);
    }
}
