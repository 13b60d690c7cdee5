#![forbid(unsafe_code)]

//! Popup lifecycle: named registry, animation-gated close, shared
//! backdrop.
//!
//! A popup is addressed by name. At most one instance per name is live at
//! a time; showing a live name returns the existing handle, and showing a
//! name whose previous instance is still playing its exit animation is
//! rejected until that close completes. Closing latches the popup
//! immediately and finalizes it either inline (no exit animation) or when
//! the driver reports the animation done. Finalization runs exactly once
//! per instance on every path.

mod backdrop;
mod controller;
mod state;

pub use backdrop::BackdropController;
pub use controller::{PopupController, PopupFactory};
pub use state::{CloseOutcome, Popup, PopupWidget};
