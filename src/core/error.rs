//! Custom error types for the application.
//!
//! - [`ConfigError`] - Embedded site configuration could not be loaded
//! - [`ClipboardError`] - Clipboard API missing or write rejected

use thiserror::Error;

/// Site configuration errors, surfaced through the root error boundary.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `site.toml` is not valid TOML or has the wrong shape.
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The typewriter needs at least one phrase.
    #[error("site configuration has no phrases")]
    NoPhrases,
    /// A skill entry has a blank name.
    #[error("skill #{0} has an empty name")]
    UnnamedSkill(usize),
}

/// Clipboard write errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// `navigator.clipboard.writeText` missing (insecure context, old browser)
    #[error("clipboard API not available")]
    Unavailable,
    /// The write promise rejected
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}
