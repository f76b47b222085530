//! Interactive input used by the `new` flow.
//!
//! The flow talks to a [`Prompter`] instead of dialoguer directly so it can be
//! driven by a scripted prompter in tests.

use super::error::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

pub trait Prompter {
    /// Reads one line. An empty `default` allows empty input without showing a default.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Picks one of `items` and returns its index.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize>;
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        input = match default {
            Some(default) if !default.is_empty() => input.default(default.to_string()),
            Some(_) => input.allow_empty(true),
            None => input,
        };
        Ok(input.interact_text()?)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }
}
