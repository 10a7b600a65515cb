//! Error type for the outer surfaces (config, locale lookup, terminal).
//!
//! The calculation itself never fails: bad numeric input is normalized
//! by [`crate::parse`] before it reaches the calculator.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TipError {
    /// Locale tag not present in the built-in currency table.
    #[error("Unknown locale: {tag} (run `tip-time locales` for the supported list)")]
    UnknownLocale { tag: String },

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TipError>;
