use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading game data. Fatal at startup; nothing else in the
/// game returns errors.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{origin}: {field} {reason}")]
    Config {
        origin: String,
        field: &'static str,
        reason: String,
    },

    #[error("level {origin}: {reason}")]
    Level { origin: String, reason: String },

    #[error("species '{id}': {reason}")]
    Species { id: String, reason: String },

    #[error("recipe '{id}': {reason}")]
    Recipe { id: String, reason: String },

    #[error("creature catalog is empty")]
    EmptyCatalog,
}
