//! Launcher error types.

use std::thread::ThreadId;

use kani_ffi::FfiError;
use thiserror::Error;

/// Problems with what the user asked for. Always detected before the
/// renderer is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("missing required path, please provide -path=/path/to/your.obj")]
    MissingPath,

    #[error("flag provided but not defined: -{0}")]
    UnknownFlag(String),

    #[error("flag needs an argument: -{0}")]
    MissingValue(String),

    #[error("bad flag syntax: {0}")]
    BadSyntax(String),

    #[error("invalid value {value:?} for flag -{flag}: {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

/// Errors that stop the launch. A successful launch never produces a value
/// at all, so this is the only thing `launch` can return.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Ffi(#[from] FfiError),

    /// The renderer thread was already chosen earlier in this process.
    #[error("renderer already pinned to thread {0:?}")]
    AlreadyPinned(ThreadId),

    #[error("failed to spawn renderer thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// The dedicated thread died before reporting its pin.
    #[error("renderer thread exited before it was pinned")]
    DedicatedThreadLost,
}
