//! Error types.
//!
//! Deck analysis itself never fails. The only fallible operation is
//! loading a format rule table from configuration.

use thiserror::Error;

/// Failure to load or validate a format rule table.
#[derive(Error, Debug)]
pub enum FormatTableError {
    #[error("failed to read format table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid format table TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown game '{0}' in format table")]
    UnknownGame(String),

    #[error("invalid rule for {game} format '{format}': {reason}")]
    InvalidRule {
        game: String,
        format: String,
        reason: String,
    },
}
