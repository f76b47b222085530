//! Pull and push of a stored pair.
//!
//! The invoker only decides argument order and verb. Transfers themselves are
//! rclone's business; its stderr is passed back untouched.

use super::error::{Result, SyncError};
use super::pair::Pair;
use super::rclone::RemoteTool;
use super::validator::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// remote -> local
    Pull,
    /// local -> remote
    Push,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Destination entries missing from the source are deleted.
    Mirror,
    /// Destination entries are only added or updated.
    CopyOnly,
}

impl SyncMode {
    pub fn verb(self) -> &'static str {
        match self {
            SyncMode::Mirror => "sync",
            SyncMode::CopyOnly => "copy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Diagnostics as printed by the external tool.
    Failed(String),
}

impl Outcome {
    pub fn into_result(self) -> Result<()> {
        match self {
            Outcome::Completed => Ok(()),
            Outcome::Failed(text) => Err(SyncError::ExternalToolFailure(text)),
        }
    }
}

pub struct SyncInvoker<'a> {
    tool: &'a dyn RemoteTool,
}

impl<'a> SyncInvoker<'a> {
    pub fn new(tool: &'a dyn RemoteTool) -> Self {
        Self { tool }
    }

    /// Transfers `pair` in `direction`. With `validate` set, a failed
    /// precondition aborts before rclone is started.
    pub fn run(&self, direction: Direction, pair: &Pair, mode: SyncMode, validate: bool) -> Result<Outcome> {
        self.run_with(direction, pair, mode, validate, || {})
    }

    /// Like [`run`](Self::run), calling `on_start` once validation has passed
    /// and right before rclone is started.
    pub fn run_with<F>(&self, direction: Direction, pair: &Pair, mode: SyncMode, validate: bool, on_start: F) -> Result<Outcome>
    where
        F: FnOnce(),
    {
        if validate {
            Validator::new(self.tool).validate_pair(&pair.local, &pair.remote)?;
        }
        on_start();

        let (source, dest) = match direction {
            Direction::Pull => (pair.remote.as_str(), pair.local.as_str()),
            Direction::Push => (pair.local.as_str(), pair.remote.as_str()),
        };
        tracing::debug!(?direction, ?mode, source, dest, "starting transfer");

        let output = match self.tool.transfer(mode, source, dest) {
            Ok(output) => output,
            Err(SyncError::Timeout(secs)) => return Ok(Outcome::Failed(SyncError::Timeout(secs).to_string())),
            Err(e) => return Err(e),
        };

        let diagnostics = output.stderr.trim_end_matches(['\n', '\r']);
        if !diagnostics.is_empty() {
            return Ok(Outcome::Failed(diagnostics.to_string()));
        }
        if !output.success() {
            let status = output.exit_code.map_or_else(|| "a signal".to_string(), |code| format!("status {}", code));
            return Ok(Outcome::Failed(format!("{} exited with {}", self.tool.name(), status)));
        }
        Ok(Outcome::Completed)
    }
}
