#![forbid(unsafe_code)]

//! String catalog with locale fallback.
//!
//! # Invariants
//!
//! 1. **Fallback chain terminates**: every lookup walks the requested
//!    locale, then the chain, exactly once; `None` means no locale
//!    provides the key.
//! 2. **Lookups are read-only**: resolution never mutates the catalog.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key not in any locale | Returns `None` |
//! | Missing locale | Locale not loaded | Falls through chain |
//! | Empty catalog | No locales loaded | All lookups return `None` |
//!
//! A missing display string is a reported condition at the call site
//! (the widget keeps its placeholder), never a fatal one.

use ahash::AHashMap;

/// Locale identifier (e.g., `"en"`, `"en-US"`, `"pl"`).
pub type Locale = String;

/// Strings for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: AHashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty locale string set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string. Re-inserting a key overwrites (last write wins).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Look up a string by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the locale has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl FromIterator<(String, String)> for LocaleStrings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            strings: iter.into_iter().collect(),
        }
    }
}

/// Catalog of display strings keyed by locale, with a fallback chain.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: AHashMap<Locale, LocaleStrings>,
    fallback_chain: Vec<Locale>,
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install (or replace) the strings for a locale.
    pub fn add_locale(&mut self, locale: impl Into<Locale>, strings: LocaleStrings) {
        self.locales.insert(locale.into(), strings);
    }

    /// Set the fallback chain walked after a miss in the requested locale.
    pub fn set_fallback_chain(&mut self, chain: Vec<Locale>) {
        self.fallback_chain = chain;
    }

    /// Whether a locale has been loaded.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Resolve `key` in `locale`, falling back along the chain.
    ///
    /// A bare language fallback is tried between the exact locale and the
    /// chain: `"en-US"` misses fall through to `"en"` automatically.
    #[must_use]
    pub fn resolve(&self, locale: &str, key: &str) -> Option<&str> {
        if let Some(value) = self.locales.get(locale).and_then(|l| l.get(key)) {
            return Some(value);
        }
        if let Some(language) = locale.split('-').next()
            && language != locale
            && let Some(value) = self.locales.get(language).and_then(|l| l.get(key))
        {
            return Some(value);
        }
        for fallback in &self.fallback_chain {
            if fallback == locale {
                continue;
            }
            if let Some(value) = self.locales.get(fallback).and_then(|l| l.get(key)) {
                return Some(value);
            }
        }
        None
    }

    /// Number of loaded locales.
    #[must_use]
    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }
}
