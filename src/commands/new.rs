//! Interactive creation of a new pair.
//!
//! The flow walks through five steps and repeats each prompt until the
//! answer is acceptable:
//!
//! 1. local folder: must be an existing directory
//! 2. remote: picked from `rclone listremotes`
//! 3. remote folder: optional, must exist on the remote
//! 4. pair name: defaults to the local folder's name, must be unused
//! 5. the pair is saved and the pull/push commands for it are printed
//!
//! It aborts early when rclone is missing or has no remotes configured.

use crate::libs::error::SyncError;
use crate::libs::messages::Message;
use crate::libs::pair::{default_name, normalize_subpath, Pair, PairStore, RemotePath};
use crate::libs::prompt::Prompter;
use crate::libs::rclone::{ensure_available, RemoteTool};
use crate::libs::validator::{is_valid_subpath_shape, validate_local, Validator};
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use std::env;
use std::path::Path;

pub fn cmd(store: &mut PairStore, tool: &dyn RemoteTool, prompter: &mut dyn Prompter) -> Result<Pair> {
    ensure_available(tool)?;
    let validator = Validator::new(tool);

    let local = loop {
        let input = prompter.input(&Message::PromptLocalPath.to_string(), None)?;
        let local = absolutize(input.trim());
        if validate_local(&local) {
            break local;
        }
        msg_error!(Message::LocalFolderInvalid(local));
    };

    let remotes = tool.list_remotes()?;
    if remotes.is_empty() {
        return Err(SyncError::NoRemotes.into());
    }
    msg_print!(Message::RemotesFound(remotes.len()), true);
    for (index, alias) in remotes.iter().enumerate() {
        msg_print!(Message::RemoteListItem(index, alias.clone()));
    }
    let alias = loop {
        let index = prompter.select(&Message::PromptSelectRemote.to_string(), &remotes)?;
        match remotes.get(index) {
            Some(alias) => break alias.clone(),
            None => msg_error!(Message::RemoteSelectionInvalid(index)),
        }
    };

    let subpath = loop {
        let input = prompter.input(&Message::PromptRemoteFolder.to_string(), Some(""))?;
        let folder = input.trim();
        if !is_valid_subpath_shape(folder) {
            msg_error!(Message::RemoteFolderShapeInvalid(folder.to_string()));
            continue;
        }
        if !validator.validate_remote_subpath(&alias, folder) {
            msg_error!(Message::RemoteFolderNotFound(folder.to_string()));
            continue;
        }
        break normalize_subpath(folder);
    };
    let remote = RemotePath::new(&alias, &subpath).to_string();

    let suggested = default_name(&local);
    let name = loop {
        let input = prompter.input(&Message::PromptPairName.to_string(), Some(suggested.as_str()))?;
        let name = match input.trim() {
            "" => suggested.clone(),
            name => name.to_string(),
        };
        if name.is_empty() {
            msg_error!(Message::PairNameEmpty);
        } else if store.contains(&name) {
            msg_error!(Message::PairNameTaken(name));
        } else {
            break name;
        }
    };

    let pair = Pair::new(&name, &local, &remote);
    store.create(pair.clone())?;

    msg_success!(Message::PairSaved(name.clone()), true);
    View::pair(&pair);
    msg_print!(Message::NextStepsHeader);
    msg_print!(Message::HintPull(name.clone()));
    msg_print!(Message::HintPush(name));
    Ok(pair)
}

/// Relative input is resolved against the working directory.
fn absolutize(input: &str) -> String {
    let path = Path::new(input);
    if input.is_empty() || path.is_absolute() {
        return input.to_string();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path).to_string_lossy().into_owned(),
        Err(_) => input.to_string(),
    }
}
