pub mod init;
pub mod list;
pub mod new;
pub mod show;
pub mod sync;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::pair::PairStore;
use crate::libs::prompt::TerminalPrompter;
use crate::libs::rclone::Rclone;
use crate::libs::sync::Direction;
use crate::msg_warning;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure how rclone is invoked")]
    Init(init::InitArgs),
    #[command(about = "Create a new local/remote pair interactively")]
    New,
    #[command(about = "List configured pairs")]
    List,
    #[command(about = "Show a single pair")]
    Show(show::ShowArgs),
    #[command(about = "Pull a pair from its remote into the local folder")]
    Pull(sync::SyncArgs),
    #[command(about = "Push a pair's local folder to its remote")]
    Push(sync::SyncArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::New => {
                let tool = rclone();
                let mut store = PairStore::new()?;
                new::cmd(&mut store, &tool, &mut TerminalPrompter::new()).map(|_| ())
            }
            Commands::List => list::cmd(&PairStore::new()?),
            Commands::Show(args) => show::cmd(args, &PairStore::new()?),
            Commands::Pull(args) => sync::cmd(Direction::Pull, args, &PairStore::new()?, &rclone()),
            Commands::Push(args) => sync::cmd(Direction::Push, args, &PairStore::new()?, &rclone()),
        }
    }
}

/// Builds the rclone adapter from the saved settings, falling back to defaults.
fn rclone() -> Rclone {
    let config = Config::read().unwrap_or_else(|e| {
        msg_warning!(Message::ConfigLoadFailed(e.to_string()));
        Config::default()
    });
    Rclone::new(&config.rclone)
}
