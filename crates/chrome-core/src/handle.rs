#![forbid(unsafe_code)]

//! Opaque handles for live widgets.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for unique widget IDs.
static WIDGET_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a live widget instance.
///
/// IDs are never reused within a process: a widget destroyed and reopened
/// under the same registry key gets a fresh `WidgetId`, which is what lets
/// the registry distinguish a stale reverse-lookup from a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a new unique widget ID.
    #[must_use]
    pub fn next() -> Self {
        Self(WIDGET_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
