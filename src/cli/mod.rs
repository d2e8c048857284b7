// src/cli/mod.rs
use std::io;

use thiserror::Error;

use crate::generators::GeneratorError;
use crate::history::HistoryError;

pub mod menu;
pub mod prompts;

pub use menu::run_session;
pub use prompts::{InquirePrompter, Prompter};

/// Problems with the user's choices. Reported to the user, never fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password length must be a whole number (got '{0}').")]
    InvalidLength(String),

    #[error("At least one character type must be included.")]
    NoCharacterClass,

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
