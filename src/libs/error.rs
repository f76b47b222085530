//! Error taxonomy shared by the pair store, validator and sync invoker.
//!
//! Every failure a command can hit maps onto one variant here. Command
//! handlers convert these into `anyhow::Error` and `main` turns any error
//! into exit code 1. The only recoverable variant is
//! [`SyncError::DuplicateName`], which the `new` flow answers with a
//! re-prompt.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    /// The external binary could not be found on PATH.
    #[error("no {0} installed on this machine")]
    ToolUnavailable(String),

    /// `local` or `remote` of a pair is empty.
    #[error("{0} path is not configured")]
    Unconfigured(&'static str),

    #[error("local folder {0} is not valid")]
    InvalidLocal(String),

    #[error("remote storage {0} is not valid")]
    InvalidRemoteAlias(String),

    #[error("remote folder {0} is not valid")]
    InvalidRemoteSubpath(String),

    #[error("pair '{0}' already exists")]
    DuplicateName(String),

    #[error("pair '{0}' not found")]
    NotFound(String),

    /// Diagnostics printed by the external tool, kept verbatim.
    #[error("{0}")]
    ExternalToolFailure(String),

    #[error("no remotes found in the rclone config, run `rclone config` first")]
    NoRemotes,

    #[error("external tool did not finish within {0} seconds")]
    Timeout(u64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
