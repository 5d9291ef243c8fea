//! Harness error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the fixture crate.
pub type FixtureResult<T> = Result<T, FixtureError>;

#[derive(Debug, Error)]
pub enum FixtureError {
    /// The inventory file could not be read.
    #[error("failed to read inventory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The inventory file is not a JSON array of `{name, sell_in, quality}`.
    #[error("invalid inventory {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}
