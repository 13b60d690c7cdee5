#![forbid(unsafe_code)]

//! Chrome widgets for appchrome: the tab bar with exclusive selection, the
//! named popup registry with animation-gated close, and the supporting
//! toggle/backdrop/safe-area controllers.
//!
//! Everything here is coordination, not presentation: widgets hold state
//! machines and request visual work through
//! [`chrome_core::VisualDriver`]. The model is single-threaded and
//! event-driven; no component blocks waiting for an animation: close
//! paths latch and resume when the driver reports completion.

pub mod popup;
pub mod registry;
pub mod safe_area;
pub mod tabbar;
pub mod toggle;

pub use popup::{
    BackdropController, CloseOutcome, Popup, PopupController, PopupWidget,
};
pub use registry::WidgetRegistry;
pub use safe_area::{Orientation, SafeAreaLayout};
pub use tabbar::{
    Activation, ItemState, SelectableItem, SelectionCoordinator, TabBarController,
};
pub use toggle::ToggleSwitch;
