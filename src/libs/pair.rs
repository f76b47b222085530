//! Named local/remote folder pairs and their on-disk registry.
//!
//! A pair is the unit `pull` and `push` operate on. The registry is a JSON
//! object keyed by pair name:
//!
//! ```json
//! {
//!   "photos": { "local": "/home/me/Photos", "remote": "gdrive:Photos/" }
//! }
//! ```
//!
//! The whole file is rewritten after every change. Two processes writing at
//! the same time race and the last writer wins.

use super::data_storage::DataStorage;
use super::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const PAIRS_FILE_NAME: &str = "pairs.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub name: String,
    pub local: String,
    pub remote: String,
}

impl Pair {
    pub fn new(name: &str, local: &str, remote: &str) -> Self {
        Pair {
            name: name.to_string(),
            local: local.to_string(),
            remote: remote.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
struct PairRecord {
    #[serde(default)]
    local: String,
    #[serde(default)]
    remote: String,
}

/// `alias:subpath` split into its two halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePath {
    /// Remote alias including the trailing `:`.
    pub alias: String,
    /// Folder under the remote, empty for the whole remote.
    pub subpath: String,
}

impl RemotePath {
    /// Splits at the first `:`; `None` when there is no alias part.
    pub fn parse(remote: &str) -> Option<RemotePath> {
        let (alias, subpath) = remote.split_once(':')?;
        if alias.is_empty() {
            return None;
        }
        Some(RemotePath {
            alias: format!("{}:", alias),
            subpath: subpath.to_string(),
        })
    }

    /// Builds a remote from a listed alias and a user-entered folder.
    pub fn new(alias: &str, subpath: &str) -> RemotePath {
        RemotePath {
            alias: alias.to_string(),
            subpath: normalize_subpath(subpath),
        }
    }
}

impl fmt::Display for RemotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.alias, self.subpath)
    }
}

/// Drops leading slashes and guarantees a trailing one on non-empty folders.
pub fn normalize_subpath(subpath: &str) -> String {
    let trimmed = subpath.trim().trim_start_matches('/');
    if trimmed.is_empty() || trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// Suggested pair name: the last segment of the local path, lowercased.
pub fn default_name(local: &str) -> String {
    local
        .trim_matches(|c: char| c == '/' || c == '\\')
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

#[derive(Debug)]
pub struct PairStore {
    path: PathBuf,
    pairs: BTreeMap<String, PairRecord>,
}

impl PairStore {
    /// Opens the registry in the per-user data directory.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(PAIRS_FILE_NAME)?;
        Self::load(path)
    }

    /// Reads the registry at `path`, creating an empty one if the file is missing.
    /// Entries are not validated here.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let store = PairStore {
                path,
                pairs: BTreeMap::new(),
            };
            store.save()?;
            return Ok(store);
        }

        let content = fs::read_to_string(&path)?;
        let pairs = if content.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&content)?
        };
        Ok(PairStore { path, pairs })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pairs.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<Pair> {
        self.pairs
            .get(name)
            .map(|record| Pair::new(name, &record.local, &record.remote))
            .ok_or_else(|| SyncError::NotFound(name.to_string()))
    }

    /// Inserts a new pair and rewrites the registry. Existing names are never overwritten.
    pub fn create(&mut self, pair: Pair) -> Result<()> {
        if self.contains(&pair.name) {
            return Err(SyncError::DuplicateName(pair.name));
        }
        self.pairs.insert(
            pair.name,
            PairRecord {
                local: pair.local,
                remote: pair.remote,
            },
        );
        self.save()
    }

    /// All pairs ordered by name.
    pub fn list(&self) -> Vec<Pair> {
        self.pairs
            .iter()
            .map(|(name, record)| Pair::new(name, &record.local, &record.remote))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, &self.pairs)?;
        Ok(())
    }
}
