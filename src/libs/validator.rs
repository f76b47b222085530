//! Heuristic checks run before a pair is saved or synced.
//!
//! Local paths are checked against the filesystem. Remote aliases and folders
//! are checked by asking rclone, so every remote check costs one process
//! spawn and is only as accurate as rclone's listing.

use super::error::{Result, SyncError};
use super::messages::Message;
use super::pair::{normalize_subpath, RemotePath};
use super::rclone::RemoteTool;
use crate::msg_info;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

static SUBPATH_SHAPE: OnceLock<Regex> = OnceLock::new();

/// True iff `path` exists and is a directory.
pub fn validate_local(path: &str) -> bool {
    let path = Path::new(path);
    path.exists() && path.is_dir()
}

/// Folder names accepted for a remote: letters, digits, `_`, `-` and `/`. Empty is allowed.
pub fn is_valid_subpath_shape(subpath: &str) -> bool {
    SUBPATH_SHAPE
        .get_or_init(|| Regex::new(r"^[/a-zA-Z0-9_-]*$").expect("subpath pattern is valid"))
        .is_match(subpath)
}

pub struct Validator<'a> {
    tool: &'a dyn RemoteTool,
}

impl<'a> Validator<'a> {
    pub fn new(tool: &'a dyn RemoteTool) -> Self {
        Self { tool }
    }

    pub fn validate_local(&self, path: &str) -> bool {
        validate_local(path)
    }

    /// Checks `alias` (with trailing `:`) against rclone's remote list.
    /// A failing listing counts as "not registered".
    pub fn validate_remote_alias(&self, alias: &str) -> bool {
        match self.tool.list_remotes() {
            Ok(remotes) => remotes.iter().any(|remote| remote == alias),
            Err(e) => {
                tracing::debug!("listing remotes failed: {}", e);
                false
            }
        }
    }

    /// An empty folder is the whole remote and always valid. Otherwise the
    /// folder must appear in rclone's directory listing at its own depth.
    pub fn validate_remote_subpath(&self, alias: &str, subpath: &str) -> bool {
        let folder = normalize_subpath(subpath);
        if folder.is_empty() {
            return true;
        }

        msg_info!(Message::ValidatingRemoteFolder);
        let depth = folder.trim_end_matches('/').split('/').count();
        match self.tool.list_subdirs(alias, depth) {
            Ok(folders) => folders.iter().any(|listed| *listed == folder),
            Err(e) => {
                tracing::debug!("listing folders of {} failed: {}", alias, e);
                false
            }
        }
    }

    /// Full precondition check for a stored pair, stopping at the first failure.
    pub fn validate_pair(&self, local: &str, remote_full: &str) -> Result<()> {
        msg_info!(Message::ValidatingPair);
        if local.is_empty() {
            return Err(SyncError::Unconfigured("local"));
        }
        if remote_full.is_empty() {
            return Err(SyncError::Unconfigured("remote"));
        }
        if !self.validate_local(local) {
            return Err(SyncError::InvalidLocal(local.to_string()));
        }

        let remote = RemotePath::parse(remote_full).ok_or_else(|| SyncError::InvalidRemoteAlias(remote_full.to_string()))?;
        if !self.validate_remote_alias(&remote.alias) {
            return Err(SyncError::InvalidRemoteAlias(remote.alias));
        }
        if !self.validate_remote_subpath(&remote.alias, &remote.subpath) {
            return Err(SyncError::InvalidRemoteSubpath(remote.subpath));
        }
        Ok(())
    }
}
