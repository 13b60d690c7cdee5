//! End-to-end scenarios across the chrome layer: configuration load, tab
//! bar selection, popup lifecycle, toggle persistence, and locale-driven
//! relocalization, all wired together the way a host application would.

#![forbid(unsafe_code)]

use std::cell::Cell;
use std::rc::Rc;

use chrome_core::{
    ChromeConfig, ChromeError, IconId, MapIconResolver, RecordingDriver, Transition,
};
use chrome_i18n::{LocaleStrings, StringCatalog};
use chrome_runtime::{BindingScope, LocaleContext, MemoryPrefs, PrefsStore};
use chrome_widgets::{
    Activation, CloseOutcome, ItemState, PopupController, PopupWidget, TabBarController,
    ToggleSwitch,
};
use proptest::prelude::*;

const CONFIG: &str = r#"
    [tab_bar]
    tab_count = 3

    [[tab_bar.tabs]]
    state = "selected"
    icon = "home"
    label_key = "tab.home"

    [[tab_bar.tabs]]
    state = "unlocked"
    icon = "shop"
    label_key = "tab.shop"

    [[tab_bar.tabs]]
    state = "locked"
    icon = "arena"
    label_key = "tab.arena"

    [[popups.popups]]
    name = "settings"

    [[popups.popups]]
    name = "credits"
    close_animation = false

    [[toggles]]
    name = "music"
    default_state = true

    [[locales]]
    code = "en"
    flag = "flag_en"

    [[locales]]
    code = "pl"
    flag = "flag_pl"
"#;

fn icons() -> MapIconResolver {
    let mut icons = MapIconResolver::new();
    icons.insert("home", IconId(1));
    icons.insert("shop", IconId(2));
    icons.insert("arena", IconId(3));
    icons
}

fn catalog() -> StringCatalog {
    let mut en = LocaleStrings::new();
    en.insert("tab.home", "Home");
    en.insert("tab.shop", "Shop");
    en.insert("tab.arena", "Arena");

    let mut pl = LocaleStrings::new();
    pl.insert("tab.home", "Główna");
    pl.insert("tab.shop", "Sklep");
    pl.insert("tab.arena", "Arena");

    let mut catalog = StringCatalog::new();
    catalog.add_locale("en", en);
    catalog.add_locale("pl", pl);
    catalog.set_fallback_chain(vec!["en".into()]);
    catalog
}

struct NullPopup;

impl PopupWidget for NullPopup {}

#[test]
fn tab_bar_from_config_selects_and_switches() {
    let config = ChromeConfig::from_toml_str(CONFIG).unwrap();
    let mut driver = RecordingDriver::new();
    let mut bar =
        TabBarController::build(config.tab_bar, &icons(), &catalog(), "en", &mut driver);

    assert_eq!(bar.selected(), Some(0));
    assert_eq!(bar.items()[0].label(), Some("Home"));
    assert_eq!(bar.items()[1].icon(), Some(IconId(2)));

    // Switching to the unlocked tab deselects the first one.
    assert_eq!(bar.activate(1, &mut driver), Some(Activation::BecameSelected));
    assert_eq!(bar.selected(), Some(1));
    assert_eq!(bar.items()[0].state(), ItemState::Unlocked);

    // The locked tab only gives feedback.
    assert_eq!(bar.activate(2, &mut driver), Some(Activation::LockedFeedback));
    assert_eq!(bar.selected(), Some(1));
    assert_eq!(driver.count(Transition::LockedFeedback), 1);
}

#[test]
fn popup_lifecycle_from_config() {
    let config = ChromeConfig::from_toml_str(CONFIG).unwrap();
    let mut driver = RecordingDriver::new();
    let mut popups = PopupController::new(config.popups);
    popups.register_factory("settings", |_| Box::new(NullPopup));
    popups.register_factory("credits", |_| Box::new(NullPopup));

    let id = popups.show("settings", &mut driver).unwrap();

    // Re-show is a no-op; but mid-close the name is unavailable.
    assert_eq!(popups.show("settings", &mut driver).unwrap(), id);
    assert_eq!(
        popups.close("settings", &mut driver),
        Some(CloseOutcome::AwaitingAnimation)
    );
    assert!(matches!(
        popups.show("settings", &mut driver),
        Err(ChromeError::NotYetAvailable(_))
    ));

    popups.on_transition_complete(id, &mut driver);
    assert!(!popups.is_open("settings"));
    assert!(popups.show("settings", &mut driver).is_ok());

    // The unanimated popup closes inline.
    popups.show("credits", &mut driver).unwrap();
    assert_eq!(
        popups.close("credits", &mut driver),
        Some(CloseOutcome::ReadyToFinalize)
    );
    assert!(!popups.is_open("credits"));
}

#[test]
fn backdrop_tracks_popup_population() {
    let config = ChromeConfig::from_toml_str(CONFIG).unwrap();
    let mut driver = RecordingDriver::new();
    let mut popups = PopupController::new(config.popups);
    popups.register_factory("settings", |_| Box::new(NullPopup));
    popups.register_factory("credits", |_| Box::new(NullPopup));

    let settings = popups.show("settings", &mut driver).unwrap();
    popups.show("credits", &mut driver).unwrap();
    assert_eq!(driver.count(Transition::BackdropShow), 1);

    // close_all finalizes "credits" inline but latches the animated
    // "settings"; the tint stays up until the last popup is really gone.
    popups.close_all(&mut driver);
    assert_eq!(popups.open_count(), 1);
    assert_eq!(driver.count(Transition::BackdropHide), 0);

    popups.on_transition_complete(settings, &mut driver);
    assert_eq!(popups.open_count(), 0);
    assert_eq!(driver.count(Transition::BackdropHide), 1);
}

#[test]
fn toggle_round_trips_through_prefs() {
    let config = ChromeConfig::from_toml_str(CONFIG).unwrap();
    let mut prefs = MemoryPrefs::new();
    let mut driver = RecordingDriver::new();

    let default = config.toggle_default("music").unwrap();
    let mut toggle = ToggleSwitch::new("music", default, &prefs, &mut driver);
    assert!(toggle.is_on());

    toggle.toggle(&mut prefs, &mut driver);
    assert_eq!(prefs.get_bool("music"), Some(false));

    // A fresh switch built over the same store restores the flipped value.
    let restored = ToggleSwitch::new("music", default, &prefs, &mut driver);
    assert!(!restored.is_on());
}

#[test]
fn locale_switch_relocalizes_the_bar() {
    let config = ChromeConfig::from_toml_str(CONFIG).unwrap();
    let mut prefs = MemoryPrefs::new();
    prefs.set_str("selected_locale", "en");
    let mut driver = RecordingDriver::new();

    let locale = LocaleContext::from_config(config.locales, &mut prefs);
    assert_eq!(locale.current_locale(), "en");

    let catalog = catalog();
    let mut bar = TabBarController::build(
        config.tab_bar,
        &icons(),
        &catalog,
        &locale.current_locale(),
        &mut driver,
    );
    assert_eq!(bar.items()[0].label(), Some("Home"));

    let switches = Rc::new(Cell::new(0));
    let switches_in = Rc::clone(&switches);
    let mut scope = BindingScope::new();
    scope.hold(locale.subscribe(move |_| switches_in.set(switches_in.get() + 1)));

    locale.switch_next(&mut prefs);
    assert_eq!(switches.get(), 1);
    assert_eq!(locale.current_locale(), "pl");
    assert_eq!(locale.current_flag(), Some("flag_pl".to_owned()));

    bar.relocalize(&catalog, &locale.current_locale());
    assert_eq!(bar.items()[0].label(), Some("Główna"));
    assert_eq!(bar.items()[1].label(), Some("Sklep"));

    // Tearing the scope down silences the callback.
    drop(scope);
    locale.switch_next(&mut prefs);
    assert_eq!(switches.get(), 1);
}

fn selected_count(bar: &TabBarController) -> usize {
    bar.items()
        .iter()
        .filter(|item| item.state() == ItemState::Selected)
        .count()
}

proptest! {
    // Any activation sequence over any tab layout keeps selection
    // exclusive, keeps locked tabs locked, and keeps the published index
    // in agreement with the item states.
    #[test]
    fn selection_stays_exclusive(
        states in proptest::collection::vec(0u8..3, 1..8),
        clicks in proptest::collection::vec(0usize..8, 0..32),
    ) {
        let mut config = chrome_core::TabBarConfig {
            tab_count: states.len(),
            tabs: states
                .iter()
                .map(|s| chrome_core::TabEntry {
                    state: match s {
                        0 => chrome_core::TabState::Locked,
                        1 => chrome_core::TabState::Unlocked,
                        _ => chrome_core::TabState::Selected,
                    },
                    ..chrome_core::TabEntry::default()
                })
                .collect(),
        };
        config.validate();

        let mut driver = RecordingDriver::new();
        let catalog = StringCatalog::new();
        let mut bar = TabBarController::build(
            config,
            &MapIconResolver::new(),
            &catalog,
            "en",
            &mut driver,
        );

        for click in clicks {
            bar.activate(click, &mut driver);
            prop_assert!(selected_count(&bar) <= 1);
            for (index, item) in bar.items().iter().enumerate() {
                if states.get(index) == Some(&0) {
                    prop_assert_eq!(item.state(), ItemState::Locked);
                }
            }
            match bar.selected() {
                Some(index) => {
                    prop_assert_eq!(bar.items()[index].state(), ItemState::Selected);
                }
                None => prop_assert_eq!(selected_count(&bar), 0),
            }
        }
    }
}
