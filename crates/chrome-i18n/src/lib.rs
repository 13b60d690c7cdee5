#![forbid(unsafe_code)]

//! Localization for appchrome: a string catalog with locale fallback.

pub mod catalog;

pub use catalog::{Locale, LocaleStrings, StringCatalog};
