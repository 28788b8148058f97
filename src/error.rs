use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A constructor could not reserve its backing storage.
    #[error("failed to allocate {bytes} bytes for {what}")]
    Alloc { what: &'static str, bytes: usize },

    #[error("{0} must have a non-zero size")]
    ZeroSize(&'static str),

    /// Bit-vector write outside `[0, len)`.
    #[error("bit index {index} out of range for vector of {len} bits")]
    OutOfRange { index: usize, len: usize },

    #[error("salt reused: {0}")]
    SaltReuse(&'static str),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {message}", .path.display())]
    Vocab { path: PathBuf, message: String },

    #[error("invalid word pattern: {0}")]
    Regex(String),
}
