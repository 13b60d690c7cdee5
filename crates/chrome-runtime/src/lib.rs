#![forbid(unsafe_code)]

//! Runtime services for appchrome: reactive change notification,
//! preference storage, and the locale context.
//!
//! Everything here assumes the single-threaded, event-driven model of the
//! chrome layer: shared state is `Rc`/`RefCell`, and all mutation happens
//! on the one logical thread of control.

pub mod locale;
pub mod prefs;
pub mod reactive;

pub use locale::{LocaleContext, detect_system_locale};
pub use prefs::{FilePrefs, MemoryPrefs, PrefsStore};
pub use reactive::{BindingScope, Observable, Subscription};
