//! Scripted stand-ins for rclone and the terminal.

#![allow(dead_code)]

use folder_sync::libs::error::{Result, SyncError};
use folder_sync::libs::prompt::Prompter;
use folder_sync::libs::rclone::{RemoteTool, ToolOutput};
use folder_sync::libs::sync::SyncMode;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListRemotes,
    ListSubdirs(String, usize),
    Transfer(String, String, String),
}

/// Answers rclone queries from fixed data and records every call.
pub struct FakeTool {
    pub available: bool,
    /// `None` makes `list_remotes` fail.
    pub remotes: Option<Vec<String>>,
    /// `None` makes `list_subdirs` fail.
    pub subdirs: Option<Vec<String>>,
    pub transfer_output: ToolOutput,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeTool {
    pub fn new(remotes: &[&str], subdirs: &[&str]) -> Self {
        FakeTool {
            available: true,
            remotes: Some(remotes.iter().map(|r| r.to_string()).collect()),
            subdirs: Some(subdirs.iter().map(|d| d.to_string()).collect()),
            transfer_output: ToolOutput {
                exit_code: Some(0),
                ..ToolOutput::default()
            },
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Number of listing queries, i.e. validator work.
    pub fn query_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| !matches!(call, Call::Transfer(..)))
            .count()
    }

    pub fn transfers(&self) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Transfer(..)))
            .cloned()
            .collect()
    }
}

impl RemoteTool for FakeTool {
    fn name(&self) -> &str {
        "rclone"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn list_remotes(&self) -> Result<Vec<String>> {
        self.calls.borrow_mut().push(Call::ListRemotes);
        self.remotes
            .clone()
            .ok_or_else(|| SyncError::ExternalToolFailure("listremotes failed".to_string()))
    }

    fn list_subdirs(&self, alias: &str, max_depth: usize) -> Result<Vec<String>> {
        self.calls.borrow_mut().push(Call::ListSubdirs(alias.to_string(), max_depth));
        self.subdirs
            .clone()
            .ok_or_else(|| SyncError::ExternalToolFailure("lsf failed".to_string()))
    }

    fn transfer(&self, mode: SyncMode, source: &str, dest: &str) -> Result<ToolOutput> {
        self.calls
            .borrow_mut()
            .push(Call::Transfer(mode.verb().to_string(), source.to_string(), dest.to_string()));
        Ok(self.transfer_output.clone())
    }
}

pub enum Answer {
    Text(String),
    Choice(usize),
}

/// Replays answers in order; running out of answers is an error.
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        ScriptedPrompter {
            answers: answers.into(),
            prompts: Vec::new(),
        }
    }

    fn exhausted() -> SyncError {
        SyncError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Answer::Text(text)) if text.is_empty() => Ok(default.unwrap_or_default().to_string()),
            Some(Answer::Text(text)) => Ok(text),
            _ => Err(Self::exhausted()),
        }
    }

    fn select(&mut self, prompt: &str, _items: &[String]) -> Result<usize> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Answer::Choice(index)) => Ok(index),
            _ => Err(Self::exhausted()),
        }
    }
}

pub fn text(value: &str) -> Answer {
    Answer::Text(value.to_string())
}
