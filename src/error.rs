//! Error type shared by every keyprobe operation.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The key name is not present in the lookup table (or the configured aliases).
    #[error("unknown virtual key name `{0}`")]
    UnknownKey(String),

    /// A numeric key code outside `0..=255`.
    #[error("virtual key code {0} is out of range (0..=255)")]
    InvalidCode(i64),

    /// The active backend cannot perform this operation on the current platform.
    #[error("{0} is not supported by this backend")]
    Unsupported(&'static str),

    /// A native call failed; `code` is the OS last-error value.
    #[error("{call} failed (os error {code})")]
    Os { call: &'static str, code: u32 },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
