use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures the scaffolding operations can surface. Every variant carries
/// the offending path so the message alone is enough to diagnose.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A listed path already exists on disk as something other than a
    /// directory. Overwriting would destroy data, so the run aborts.
    #[error("path exists but is not a directory: {path}")]
    PathConflict { path: Utf8PathBuf },

    /// An OS-level failure (permission denied, disk full, ...) during a
    /// create or write.
    #[error("{operation} failed for {path}")]
    Io {
        operation: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub fn io(operation: &'static str, path: Utf8PathBuf, source: io::Error) -> Self {
        Self::Io {
            operation,
            path,
            source,
        }
    }
}
