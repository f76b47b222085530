//! Core library modules for folder-sync.
//!
//! - **Storage**: [`data_storage`], [`config`] and the [`pair`] registry
//! - **rclone**: the [`rclone`] adapter, the [`validator`] and the [`sync`] invoker
//! - **User interface**: [`messages`], [`prompt`] and [`view`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use folder_sync::libs::config::Config;
//! use folder_sync::libs::pair::PairStore;
//! use folder_sync::libs::rclone::Rclone;
//! use folder_sync::libs::sync::{Direction, SyncInvoker, SyncMode};
//!
//! let config = Config::read()?;
//! let rclone = Rclone::new(&config.rclone);
//! let store = PairStore::new()?;
//! let pair = store.get("photos")?;
//! SyncInvoker::new(&rclone).run(Direction::Pull, &pair, SyncMode::Mirror, true)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod pair;
pub mod prompt;
pub mod rclone;
pub mod sync;
pub mod validator;
pub mod view;
