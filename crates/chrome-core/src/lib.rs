#![forbid(unsafe_code)]

//! Core types for appchrome.
//!
//! This crate holds the pieces every other appchrome crate builds on:
//! widget handles, the configuration model (with validation), the error
//! taxonomy, the visual-transition contract, and the small amount of
//! geometry needed for safe-area layout.

pub mod assets;
pub mod config;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod visual;

pub use assets::{IconId, IconResolver, MapIconResolver};
pub use config::{
    ChromeConfig, LocaleEntry, PopupConfig, PopupEntry, TabBarConfig, TabEntry, TabState,
    ToggleEntry,
};
pub use error::ChromeError;
pub use geometry::{AnchorBox, Rect, Size};
pub use handle::WidgetId;
pub use visual::{NullDriver, RecordingDriver, Transition, VisualDriver, VisualState};
