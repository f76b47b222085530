//! Display implementation for folder-sync messages.
//!
//! Every user-facing string is produced here so the wording stays
//! consistent between the interactive flow and the pull/push commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === VALIDATION MESSAGES ===
            Message::ValidatingPair => "Validating pair configuration...".to_string(),
            Message::ValidatingRemoteFolder => "Validating remote folder...".to_string(),
            Message::LocalFolderInvalid(path) => format!("Local folder {} does not exist or is not a directory.", path),
            Message::RemoteSelectionInvalid(index) => format!("{} is not a valid remote index.", index),
            Message::RemoteFolderShapeInvalid(folder) => format!(
                "Remote folder '{}' may only contain letters, digits, '_', '-' and '/'.",
                folder
            ),
            Message::RemoteFolderNotFound(folder) => format!("Remote folder {} does not exist.", folder),

            // === REMOTE MESSAGES ===
            Message::RemotesFound(count) => format!("Found {} remote destinations from the rclone config:", count),
            Message::RemoteListItem(index, alias) => format!("[ {} ]: {}", index, alias),

            // === PAIR MESSAGES ===
            Message::PairNameEmpty => "Pair name cannot be empty.".to_string(),
            Message::PairNameTaken(name) => format!("Pair '{}' already exists, choose another name.", name),
            Message::PairSaved(name) => format!("Pair '{}' saved.", name),
            Message::PairNameLabel => ":: Pair name".to_string(),
            Message::PairLocalLabel => ":: Local".to_string(),
            Message::PairRemoteLabel => ":: Remote".to_string(),
            Message::PairListHeader => "Configured pairs:".to_string(),
            Message::NoPairsFound => "No pairs configured yet. Create one with `folder-sync new`.".to_string(),
            Message::NextStepsHeader => "Next steps:".to_string(),
            Message::HintPull(name) => format!("folder-sync pull {}    # remote -> local", name),
            Message::HintPush(name) => format!("folder-sync push {}    # local -> remote", name),

            // === SYNC MESSAGES ===
            Message::PullStarted => "Pull started.".to_string(),
            Message::PullCompleted => "Pull completed.".to_string(),
            Message::PushStarted => "Push started.".to_string(),
            Message::PushCompleted => "Push completed.".to_string(),
            Message::RunningTool(command) => format!("Running: {}", command),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults restored".to_string(),
            Message::ConfigModuleRclone => "Rclone settings".to_string(),
            Message::ConfigLoadFailed(error) => format!("Failed to load configuration, using defaults: {}", error),

            // === PROMPTS ===
            Message::PromptLocalPath => "Local folder".to_string(),
            Message::PromptSelectRemote => "Select a remote".to_string(),
            Message::PromptRemoteFolder => "Remote folder (leave blank for the whole remote)".to_string(),
            Message::PromptPairName => "Pair name".to_string(),
            Message::PromptRcloneBinary => "rclone executable".to_string(),
            Message::PromptShowProgress => "Show transfer progress".to_string(),
            Message::PromptTimeout => "Transfer timeout in seconds (0 for none)".to_string(),
        };
        write!(f, "{}", text)
    }
}
