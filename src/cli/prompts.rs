// src/cli/prompts.rs
use inquire::{Confirm, InquireError, Text};

/// Source of answers for the interactive session.
pub trait Prompter {
    fn text(&mut self, message: &str) -> Result<String, InquireError>;

    fn confirm(&mut self, message: &str) -> Result<bool, InquireError>;
}

/// Asks on the terminal. An empty yes/no answer counts as "no".
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str) -> Result<String, InquireError> {
        Text::new(message).prompt()
    }

    fn confirm(&mut self, message: &str) -> Result<bool, InquireError> {
        Confirm::new(message).with_default(false).prompt()
    }
}
