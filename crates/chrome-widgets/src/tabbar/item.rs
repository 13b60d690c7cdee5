#![forbid(unsafe_code)]

//! Per-tab state machine.

use chrome_core::{IconId, TabState, Transition, VisualDriver, VisualState, WidgetId};
use tracing::debug;

/// Runtime state of a tab item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Locked,
    Unlocked,
    Selected,
}

impl From<TabState> for ItemState {
    fn from(state: TabState) -> Self {
        match state {
            TabState::Locked => Self::Locked,
            TabState::Unlocked => Self::Unlocked,
            TabState::Selected => Self::Selected,
        }
    }
}

impl ItemState {
    const fn visual(self) -> VisualState {
        match self {
            Self::Locked => VisualState::Locked,
            Self::Unlocked => VisualState::Unlocked,
            Self::Selected => VisualState::Selected,
        }
    }
}

/// What an activation did, reported upward to the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The item is locked; only feedback was played.
    LockedFeedback,
    /// The item transitioned Unlocked → Selected.
    BecameSelected,
    /// The item was already selected; only feedback was played.
    ReselectedFeedback,
}

/// A single selectable tab item.
///
/// The item owns its state machine and nothing else: every transition
/// requests a visual through the driver, and selection bookkeeping is the
/// coordinator's job. A `Locked` item never reaches `Selected` directly;
/// activation on `Locked` is rejected with feedback, not promoted.
#[derive(Debug)]
pub struct SelectableItem {
    id: WidgetId,
    state: ItemState,
    icon: Option<IconId>,
    label: Option<String>,
}

impl SelectableItem {
    /// Create an item in `initial` state, jumping the visual straight
    /// there (no transition animation on build).
    pub fn new(initial: ItemState, driver: &mut dyn VisualDriver) -> Self {
        let id = WidgetId::next();
        driver.set_state(id, initial.visual());
        debug!(%id, state = ?initial, "tab item initialized");
        Self {
            id,
            state: initial,
            icon: None,
            label: None,
        }
    }

    /// The item's widget handle.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ItemState {
        self.state
    }

    /// Assign the resolved icon.
    pub fn set_icon(&mut self, icon: IconId) {
        self.icon = Some(icon);
    }

    /// Resolved icon, if any.
    #[must_use]
    pub fn icon(&self) -> Option<IconId> {
        self.icon
    }

    /// Assign the resolved display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Resolved label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Handle a user activation (click/tap).
    pub fn activate(&mut self, driver: &mut dyn VisualDriver) -> Activation {
        match self.state {
            ItemState::Locked => {
                driver.play(self.id, Transition::LockedFeedback);
                Activation::LockedFeedback
            }
            ItemState::Unlocked => {
                self.state = ItemState::Selected;
                driver.play(self.id, Transition::Select);
                Activation::BecameSelected
            }
            ItemState::Selected => {
                driver.play(self.id, Transition::ReselectedFeedback);
                Activation::ReselectedFeedback
            }
        }
    }

    /// Coordinator-issued deselection.
    ///
    /// Valid only from `Selected`; any other state is a no-op, since the
    /// coordinator may issue this speculatively.
    pub fn force_deselect(&mut self, driver: &mut dyn VisualDriver) {
        if self.state != ItemState::Selected {
            return;
        }
        self.state = ItemState::Unlocked;
        driver.play(self.id, Transition::Unselect);
    }
}
