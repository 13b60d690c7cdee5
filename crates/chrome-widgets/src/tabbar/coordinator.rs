#![forbid(unsafe_code)]

//! Selection exclusivity across a set of tab items.

use chrome_core::VisualDriver;
use chrome_runtime::{Observable, Subscription};
use tracing::{debug, warn};

use super::item::{Activation, ItemState, SelectableItem};

/// Owns the tab items and enforces that at most one is `Selected`.
///
/// Items report what an activation did through [`Activation`]; the
/// coordinator reacts by deselecting the previous holder and publishing
/// the new index on an [`Observable`]. Feedback-only activations
/// (locked, reselected) change nothing and publish nothing.
pub struct SelectionCoordinator {
    items: Vec<SelectableItem>,
    selected: Observable<Option<usize>>,
}

impl SelectionCoordinator {
    /// Build a coordinator over pre-built items.
    ///
    /// If the item set arrives with more than one `Selected` entry, every
    /// entry after the first is demoted; the first wins. The initial
    /// selection (if any) is published immediately.
    pub fn build(mut items: Vec<SelectableItem>, driver: &mut dyn VisualDriver) -> Self {
        let mut first_selected = None;
        for (index, item) in items.iter_mut().enumerate() {
            if item.state() != ItemState::Selected {
                continue;
            }
            if first_selected.is_none() {
                first_selected = Some(index);
            } else {
                warn!(index, "duplicate selected item demoted");
                item.force_deselect(driver);
            }
        }
        debug!(count = items.len(), selected = ?first_selected, "tab coordinator built");
        Self {
            items,
            selected: Observable::new(first_selected),
        }
    }

    /// Handle a user activation on the item at `index`.
    ///
    /// Out-of-range indices are ignored with a warning. Returns what the
    /// item reported, or `None` for an out-of-range index.
    pub fn activate(
        &mut self,
        index: usize,
        driver: &mut dyn VisualDriver,
    ) -> Option<Activation> {
        if index >= self.items.len() {
            warn!(index, count = self.items.len(), "activation index out of range");
            return None;
        }
        let activation = self.items[index].activate(driver);
        if activation == Activation::BecameSelected {
            self.on_item_selected(index, driver);
        }
        self.debug_check_exclusive();
        Some(activation)
    }

    /// React to `index` having become selected: deselect the previous
    /// holder and publish. Idempotent when `index` already holds selection.
    fn on_item_selected(&mut self, index: usize, driver: &mut dyn VisualDriver) {
        let previous = self.selected.get();
        if previous == Some(index) {
            return;
        }
        if let Some(prev) = previous {
            if let Some(item) = self.items.get_mut(prev) {
                item.force_deselect(driver);
            }
        }
        self.selected.set(Some(index));
    }

    /// Currently selected index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected.get()
    }

    /// Observe selection changes. The callback fires on every change
    /// until the returned subscription is dropped.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(&Option<usize>) + 'static) -> Subscription {
        self.selected.subscribe(callback)
    }

    /// The managed items, in index order.
    #[must_use]
    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    /// Mutable access to a single item, for label/icon updates.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut SelectableItem> {
        self.items.get_mut(index)
    }

    /// Number of managed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the coordinator manages no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn debug_check_exclusive(&self) {
        debug_assert!(
            self.items
                .iter()
                .filter(|item| item.state() == ItemState::Selected)
                .count()
                <= 1,
            "more than one item selected"
        );
    }
}
