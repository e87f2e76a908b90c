use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the fallible operations of this crate.
///
/// Both variants are deterministic: a failing call fails the same way every
/// time for the same input, so nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum Error {
    /// The blocklist resource could not be read.
    #[error("cannot read blocklist {}: {source}", path.display())]
    Configuration {
        /// Path of the resource that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A token sequence was too short to score.
    #[error("cannot score an empty token sequence")]
    InvalidInput,
}
