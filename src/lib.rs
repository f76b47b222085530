//! # folder-sync
//!
//! Keeps named pairs of local folders and rclone remotes, and pulls or
//! pushes them on demand.
//!
//! ## Features
//!
//! - **Pair registry**: named local/remote pairs stored as JSON in the user's data directory
//! - **Validation**: local folders, remote aliases and remote folders are checked before a transfer
//! - **Mirror or copy**: `rclone sync` by default, `rclone copy` with `--use-copy`
//! - **Interactive setup**: `folder-sync new` walks through creating a pair
//!
//! ## Usage
//!
//! ```rust,no_run
//! use folder_sync::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
