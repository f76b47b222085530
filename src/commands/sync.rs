//! `pull` and `push` commands.

use crate::libs::messages::Message;
use crate::libs::pair::PairStore;
use crate::libs::rclone::{ensure_available, RemoteTool};
use crate::libs::sync::{Direction, SyncInvoker, SyncMode};
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Name of the pair to transfer
    #[arg(required = true)]
    pub name: String,

    /// Use rclone copy instead of sync, so nothing is deleted at the destination
    #[arg(long)]
    pub use_copy: bool,

    /// Skip path validations
    #[arg(long)]
    pub fast: bool,
}

/// Transfers the named pair in `direction`.
///
/// Missing rclone, an unknown pair and failed validation are errors. Once
/// rclone has run, its diagnostics are printed and the command still
/// succeeds.
pub fn cmd(direction: Direction, args: SyncArgs, store: &PairStore, tool: &dyn RemoteTool) -> Result<()> {
    ensure_available(tool)?;
    let pair = store.get(&args.name)?;
    let mode = if args.use_copy { SyncMode::CopyOnly } else { SyncMode::Mirror };

    let (started, completed) = match direction {
        Direction::Pull => (Message::PullStarted, Message::PullCompleted),
        Direction::Push => (Message::PushStarted, Message::PushCompleted),
    };

    let outcome = SyncInvoker::new(tool).run_with(direction, &pair, mode, !args.fast, || msg_print!(started))?;
    match outcome.into_result() {
        Ok(()) => msg_success!(completed),
        Err(e) => msg_error!(e),
    }
    Ok(())
}
