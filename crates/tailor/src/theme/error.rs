//! Theme loading and validation errors.

use std::path::PathBuf;

/// Error returned when a button theme cannot be loaded or is invalid.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The theme file could not be read.
    #[error("failed to read theme file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The theme file is not a valid theme document.
    #[error("invalid theme: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A table entry resolves to no classes at all.
    #[error("theme entry '{entry}' has no classes")]
    EmptyEntry { entry: String },
}
