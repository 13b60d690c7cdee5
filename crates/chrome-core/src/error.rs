#![forbid(unsafe_code)]

//! Error taxonomy for appchrome.
//!
//! Lifecycle races (double-close, close-after-destroyed) are deliberately
//! *not* errors: they are absorbed by idempotent design at the call site.
//! What remains here are the conditions a caller can actually act on.

/// Errors surfaced by the chrome coordination layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    /// No configuration entry exists for the requested key.
    ConfigurationMissing(String),
    /// An open was requested for a key that already has a live widget.
    AlreadyOpen(String),
    /// A lookup referenced an unknown key or item.
    NotFound(String),
    /// The widget exists but is mid-close and cannot be reopened yet.
    NotYetAvailable(String),
    /// A configuration source could not be read or parsed.
    ConfigParse(String),
}

impl std::fmt::Display for ChromeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigurationMissing(key) => {
                write!(f, "no configuration entry for '{key}'")
            }
            Self::AlreadyOpen(key) => write!(f, "'{key}' is already open"),
            Self::NotFound(key) => write!(f, "'{key}' not found"),
            Self::NotYetAvailable(key) => {
                write!(f, "'{key}' is closing and not yet available")
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl std::error::Error for ChromeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_key() {
        let err = ChromeError::ConfigurationMissing("settings".into());
        assert!(err.to_string().contains("settings"));

        let err = ChromeError::NotYetAvailable("shop".into());
        assert!(err.to_string().contains("closing"));
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&ChromeError::NotFound("x".into()));
    }
}
