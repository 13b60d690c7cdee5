#![forbid(unsafe_code)]

//! Locale context: startup selection, runtime switching, persistence.
//!
//! Startup preference order: saved preference (when it still names an
//! available locale), then the detected system locale, then the first
//! available locale. The active locale is published through an
//! [`Observable`] so widgets subscribe explicitly and unsubscribe on
//! teardown.

use chrome_core::config::LocaleEntry;
use chrome_i18n::Locale;
use std::env;
use tracing::{debug, warn};

use crate::prefs::PrefsStore;
use crate::reactive::{Observable, Subscription};

/// Preference key for the persisted locale choice.
const LOCALE_PREF_KEY: &str = "selected_locale";

/// Runtime locale state for the chrome layer.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    available: Vec<LocaleEntry>,
    current: Observable<Locale>,
}

impl LocaleContext {
    /// Build a context from the configured locale list, applying the
    /// startup preference order against `prefs`.
    ///
    /// A freshly detected (non-saved) locale is persisted immediately so
    /// the next launch starts from the same choice.
    #[must_use]
    pub fn from_config(available: Vec<LocaleEntry>, prefs: &mut dyn PrefsStore) -> Self {
        let saved = prefs.get_str(LOCALE_PREF_KEY);
        let initial = match saved {
            Some(code) if available.iter().any(|l| l.code == code) => {
                debug!(locale = %code, "restored saved locale");
                code
            }
            Some(code) => {
                warn!(locale = %code, "saved locale is no longer available");
                Self::detect_or_first(&available, prefs)
            }
            None => Self::detect_or_first(&available, prefs),
        };
        Self {
            available,
            current: Observable::new(initial),
        }
    }

    fn detect_or_first(available: &[LocaleEntry], prefs: &mut dyn PrefsStore) -> Locale {
        let detected = detect_system_locale();
        let chosen = available
            .iter()
            .find(|l| locale_matches(&l.code, &detected))
            .or_else(|| available.first())
            .map_or_else(|| "en".to_string(), |l| l.code.clone());
        debug!(detected = %detected, chosen = %chosen, "selected startup locale");
        prefs.set_str(LOCALE_PREF_KEY, &chosen);
        chosen
    }

    /// The active locale.
    #[must_use]
    pub fn current_locale(&self) -> Locale {
        self.current.get()
    }

    /// Switch to a specific locale and persist the choice.
    ///
    /// Unknown codes are rejected with a warning; the active locale is
    /// unchanged.
    pub fn set_locale(&self, code: &str, prefs: &mut dyn PrefsStore) {
        if !self.available.iter().any(|l| l.code == code) {
            warn!(locale = %code, "ignoring switch to unavailable locale");
            return;
        }
        prefs.set_str(LOCALE_PREF_KEY, code);
        self.current.set(code.to_owned());
    }

    /// Cycle to the next available locale, persisting the choice.
    ///
    /// With zero or one available locale this is a no-op.
    pub fn switch_next(&self, prefs: &mut dyn PrefsStore) {
        if self.available.len() < 2 {
            return;
        }
        let current = self.current.get();
        let index = self
            .available
            .iter()
            .position(|l| l.code == current)
            .unwrap_or(0);
        let next = &self.available[(index + 1) % self.available.len()];
        prefs.set_str(LOCALE_PREF_KEY, &next.code);
        self.current.set(next.code.clone());
    }

    /// Flag icon name for the active locale.
    ///
    /// A configured locale without a flag is a reported miss.
    #[must_use]
    pub fn current_flag(&self) -> Option<String> {
        let current = self.current.get();
        let flag = self
            .available
            .iter()
            .find(|l| l.code == current)
            .and_then(|l| l.flag.clone());
        if flag.is_none() {
            warn!(locale = %current, "no flag configured for locale");
        }
        flag
    }

    /// Subscribe to locale changes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&Locale) + 'static) -> Subscription {
        self.current.subscribe(callback)
    }

    /// Version counter of the active locale.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.current.version()
    }

    /// The configured locale list, in cycle order.
    #[must_use]
    pub fn available(&self) -> &[LocaleEntry] {
        &self.available
    }
}

/// Whether an available locale code satisfies a detected system locale.
///
/// Exact match first, then bare-language match (`"en"` covers `"en-US"`).
fn locale_matches(available: &str, detected: &str) -> bool {
    if available.eq_ignore_ascii_case(detected) {
        return true;
    }
    let language = detected.split('-').next().unwrap_or(detected);
    available.eq_ignore_ascii_case(language)
}

/// Detect the system locale from environment variables.
///
/// Preference order: `LC_ALL`, then `LANG`. Falls back to `"en"`.
#[must_use]
pub fn detect_system_locale() -> Locale {
    let lc_all = env::var("LC_ALL").ok();
    let lang = env::var("LANG").ok();
    detect_system_locale_from(lc_all.as_deref(), lang.as_deref())
}

fn detect_system_locale_from(lc_all: Option<&str>, lang: Option<&str>) -> Locale {
    lc_all
        .and_then(normalize_locale_raw)
        .or_else(|| lang.and_then(normalize_locale_raw))
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_locale_raw(raw: &str) -> Option<Locale> {
    let raw = raw.trim();
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw).trim();
    if raw.is_empty() {
        return None;
    }
    let normalized = raw.replace('_', "-");
    if normalized.eq_ignore_ascii_case("c") || normalized.eq_ignore_ascii_case("posix") {
        return Some("en".to_string());
    }
    Some(normalized)
}
