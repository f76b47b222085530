//! Tool settings command.
//!
//! Runs an interactive wizard that edits how rclone is invoked: which
//! executable, whether transfers show progress and an optional timeout.
//! Pairs are not touched here; they are created with `new`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration and fall back to defaults
    #[arg(short, long)]
    delete: bool,
}

/// Executes the init command.
///
/// With `--delete` the configuration file is removed and nothing is
/// prompted. Otherwise the wizard runs with the current values as defaults
/// and the result is saved.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
