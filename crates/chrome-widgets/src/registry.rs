#![forbid(unsafe_code)]

//! Generic live-widget registry keyed by name.
//!
//! The registry enforces "at most one live widget per key" and keeps a
//! reverse map from [`WidgetId`] back to key so a widget destroyed through
//! any path other than [`close`](WidgetRegistry::close), typically an
//! animation-driven self-destruct, can still be reconciled via
//! [`notify_destroyed`](WidgetRegistry::notify_destroyed). Without that
//! path the registry would retain a dangling entry and report the key as
//! already open forever.
//!
//! # Invariants
//!
//! - A key maps to at most one live entry.
//! - Forward (key → entry) and reverse (id → key) maps agree at all times.
//! - Removal through any operation leaves both maps consistent.
//!
//! # Failure Modes
//!
//! - `close()` on an absent key is a no-op (returns `None`, no error).
//! - `notify_destroyed()` for an unknown or already-removed id is a no-op.
//! - `open()` on a live key fails without invoking the factory.

use ahash::AHashMap;
use chrome_core::{ChromeError, WidgetId};
use tracing::debug;

struct Entry<W> {
    id: WidgetId,
    widget: W,
}

/// Mapping from string keys to single live widgets.
///
/// The registry owns the widgets; callers decide what finalization means
/// by draining entries through `close`/`close_all` and running their own
/// finalizers exactly once per drained widget.
pub struct WidgetRegistry<W> {
    entries: AHashMap<String, Entry<W>>,
    reverse: AHashMap<WidgetId, String>,
}

impl<W> Default for WidgetRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> WidgetRegistry<W> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
            reverse: AHashMap::new(),
        }
    }

    /// Open a new widget under `key`.
    ///
    /// The factory receives the freshly allocated [`WidgetId`]. If `key`
    /// already has a live entry the factory is not invoked and
    /// [`ChromeError::AlreadyOpen`] is returned.
    pub fn open(
        &mut self,
        key: &str,
        factory: impl FnOnce(WidgetId) -> W,
    ) -> Result<WidgetId, ChromeError> {
        if self.entries.contains_key(key) {
            return Err(ChromeError::AlreadyOpen(key.to_owned()));
        }
        let id = WidgetId::next();
        self.entries.insert(
            key.to_owned(),
            Entry {
                id,
                widget: factory(id),
            },
        );
        self.reverse.insert(id, key.to_owned());
        debug!(key, %id, "registry opened widget");
        Ok(id)
    }

    /// Open under `key`, or return the existing live handle.
    ///
    /// The no-op-on-duplicate policy for call sites that treat a repeat
    /// open as "bring to front" rather than an error.
    pub fn open_or_existing(&mut self, key: &str, factory: impl FnOnce(WidgetId) -> W) -> WidgetId {
        if let Some(entry) = self.entries.get(key) {
            return entry.id;
        }
        match self.open(key, factory) {
            Ok(id) => id,
            // Unreachable: the live-entry case was handled above.
            Err(_) => unreachable!("entry appeared during open"),
        }
    }

    /// Remove and return the widget under `key`, if any.
    ///
    /// Idempotent: an absent key is a no-op returning `None`. The caller
    /// runs whatever finalization the returned widget needs.
    pub fn close(&mut self, key: &str) -> Option<W> {
        let entry = self.entries.remove(key)?;
        self.reverse.remove(&entry.id);
        debug!(key, id = %entry.id, "registry closed widget");
        Some(entry.widget)
    }

    /// Reconcile an out-of-band destruction: remove the mapping for `id`
    /// without handing the widget back for finalization.
    ///
    /// Safe to call for ids that were never registered or were already
    /// removed. Returns the key that was released, if any.
    pub fn notify_destroyed(&mut self, id: WidgetId) -> Option<String> {
        let key = self.reverse.remove(&id)?;
        self.entries.remove(&key);
        debug!(key = %key, %id, "registry reconciled out-of-band destruction");
        Some(key)
    }

    /// Drain every entry. Order is unspecified; each widget is yielded
    /// exactly once.
    pub fn close_all(&mut self) -> Vec<W> {
        self.reverse.clear();
        self.entries.drain().map(|(_, e)| e.widget).collect()
    }

    /// Borrow the widget under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&W> {
        self.entries.get(key).map(|e| &e.widget)
    }

    /// Mutably borrow the widget under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut W> {
        self.entries.get_mut(key).map(|e| &mut e.widget)
    }

    /// Mutably borrow a widget by id.
    pub fn get_mut_by_id(&mut self, id: WidgetId) -> Option<&mut W> {
        let key = self.reverse.get(&id)?;
        self.entries.get_mut(key).map(|e| &mut e.widget)
    }

    /// Live handle for `key`, if open.
    #[must_use]
    pub fn id_of(&self, key: &str) -> Option<WidgetId> {
        self.entries.get(key).map(|e| e.id)
    }

    /// Key for a live handle (reverse lookup).
    #[must_use]
    pub fn key_of(&self, id: WidgetId) -> Option<&str> {
        self.reverse.get(&id).map(String::as_str)
    }

    /// Whether `key` has a live entry.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys of all live entries, in unspecified order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W> std::fmt::Debug for WidgetRegistry<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetRegistry")
            .field("len", &self.entries.len())
            .finish()
    }
}
