//! Adapter around the rclone executable.
//!
//! Everything folder-sync knows about remotes comes from four rclone
//! invocations: `listremotes`, `lsf --dirs-only`, `sync` and `copy`. The
//! [`RemoteTool`] trait is the seam between those invocations and the rest of
//! the crate; [`Rclone`] is the real implementation that spawns processes.

use super::config::RcloneConfig;
use super::error::{Result, SyncError};
use super::sync::SyncMode;
use crate::msg_debug;
use crate::libs::messages::Message;
use std::io::{ErrorKind, Read};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Result of one external process run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Operations folder-sync needs from the external sync tool.
pub trait RemoteTool {
    /// Name of the executable, used in diagnostics.
    fn name(&self) -> &str;

    fn is_available(&self) -> bool;

    /// Configured remote aliases, each of the form `name:`.
    fn list_remotes(&self) -> Result<Vec<String>>;

    /// Directories under `alias` down to `max_depth` levels, each ending in `/`.
    fn list_subdirs(&self, alias: &str, max_depth: usize) -> Result<Vec<String>>;

    /// Copies or mirrors `source` into `dest`.
    fn transfer(&self, mode: SyncMode, source: &str, dest: &str) -> Result<ToolOutput>;
}

/// Checks whether `name` resolves to an executable on PATH.
pub fn is_executable_available(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Fails with [`SyncError::ToolUnavailable`] unless the tool can be started.
pub fn ensure_available(tool: &dyn RemoteTool) -> Result<()> {
    if tool.is_available() {
        Ok(())
    } else {
        Err(SyncError::ToolUnavailable(tool.name().to_string()))
    }
}

pub struct Rclone {
    binary: String,
    progress: bool,
    timeout: Option<Duration>,
}

impl Rclone {
    pub fn new(config: &RcloneConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            progress: config.progress,
            timeout: config.timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs),
        }
    }

    fn command(&self, args: &[String]) -> Command {
        msg_debug!(Message::RunningTool(format!("{} {}", self.binary, args.join(" "))));
        let mut command = Command::new(&self.binary);
        command.args(args);
        command
    }

    fn spawn_error(&self, error: std::io::Error) -> SyncError {
        if error.kind() == ErrorKind::NotFound {
            SyncError::ToolUnavailable(self.binary.clone())
        } else {
            SyncError::Io(error)
        }
    }

    /// Runs rclone to completion with both output streams captured.
    fn capture(&self, args: &[String]) -> Result<ToolOutput> {
        let output = self.command(args).output().map_err(|e| self.spawn_error(e))?;
        Ok(ToolOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Runs rclone with stdout left on the terminal and stderr captured,
    /// killing it once the configured timeout elapses.
    fn stream(&self, args: &[String]) -> Result<ToolOutput> {
        let mut child = self
            .command(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // Drained on its own thread so a chatty child cannot block on a full pipe.
        let stderr = child.stderr.take();
        let reader = thread::spawn(move || {
            let mut buffer = String::new();
            if let Some(mut stderr) = stderr {
                let _ = stderr.read_to_string(&mut buffer);
            }
            buffer
        });

        let status = match self.timeout {
            None => child.wait()?,
            Some(limit) => {
                let deadline = Instant::now() + limit;
                loop {
                    if let Some(status) = child.try_wait()? {
                        break status;
                    }
                    if Instant::now() >= deadline {
                        child.kill()?;
                        child.wait()?;
                        return Err(SyncError::Timeout(limit.as_secs()));
                    }
                    thread::sleep(POLL_INTERVAL);
                }
            }
        };

        Ok(ToolOutput {
            exit_code: status.code(),
            stdout: String::new(),
            stderr: reader.join().unwrap_or_default(),
        })
    }
}

impl RemoteTool for Rclone {
    fn name(&self) -> &str {
        &self.binary
    }

    fn is_available(&self) -> bool {
        is_executable_available(&self.binary)
    }

    fn list_remotes(&self) -> Result<Vec<String>> {
        let output = self.capture(&["listremotes".to_string()])?;
        if !output.success() {
            return Err(SyncError::ExternalToolFailure(output.stderr.trim_end().to_string()));
        }
        Ok(split_lines(&output.stdout))
    }

    fn list_subdirs(&self, alias: &str, max_depth: usize) -> Result<Vec<String>> {
        let args = [
            "lsf".to_string(),
            "--dirs-only".to_string(),
            alias.to_string(),
            format!("--max-depth={}", max_depth),
        ];
        let output = self.capture(&args)?;
        if !output.success() {
            return Err(SyncError::ExternalToolFailure(output.stderr.trim_end().to_string()));
        }
        Ok(split_lines(&output.stdout))
    }

    fn transfer(&self, mode: SyncMode, source: &str, dest: &str) -> Result<ToolOutput> {
        let mut args = vec![mode.verb().to_string(), source.to_string(), dest.to_string()];
        if self.progress {
            args.push("-P".to_string());
        }
        self.stream(&args)
    }
}

fn split_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
