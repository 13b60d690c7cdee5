#![forbid(unsafe_code)]

//! Grouped subscription teardown.

use super::observable::{Observable, Subscription};

/// Owns a batch of subscriptions with one lifetime.
///
/// A controller that wires itself to several observables parks each
/// [`Subscription`] here; dropping the scope (or calling
/// [`clear`](BindingScope::clear)) detaches every callback in the batch,
/// so teardown cannot forget one. A cleared scope is empty but usable
/// again.
pub struct BindingScope {
    subscriptions: Vec<Subscription>,
}

impl BindingScope {
    /// An empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Park a subscription created elsewhere.
    pub fn hold(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    /// Subscribe to `source` and park the resulting subscription here.
    pub fn subscribe<T: Clone + PartialEq + 'static>(
        &mut self,
        source: &Observable<T>,
        callback: impl Fn(&T) + 'static,
    ) {
        self.subscriptions.push(source.subscribe(callback));
    }

    /// How many subscriptions the scope holds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether the scope holds none.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Detach every held callback now instead of at drop.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}

impl Default for BindingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BindingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingScope")
            .field("len", &self.subscriptions.len())
            .finish()
    }
}
