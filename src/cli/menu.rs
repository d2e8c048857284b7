// src/cli/menu.rs
use std::io::Write;

use console::style;

use super::{CliError, Prompter, Result, ValidationError};
use crate::generators::generate_password;
use crate::history::{HistoryBackend, PasswordHistory};
use crate::models::GenerationSettings;

/// One pass through the generator: ask for options, generate and save a
/// password, then offer to show the history.
///
/// Validation and storage problems are written to `out` as `Error: ...` lines
/// and the session carries on to the history prompt. Only terminal failures
/// (a cancelled prompt, a closed output) are returned.
pub fn run_session<P, B, W>(prompter: &mut P, history: &PasswordHistory<B>, out: &mut W) -> Result<()>
where
    P: Prompter,
    B: HistoryBackend,
    W: Write,
{
    writeln!(out, "{}", style("🔐 Welcome to the Advanced Password Generator!").bold())?;
    writeln!(out, "Customize your password generation preferences.")?;

    match generate_and_save(prompter, history, out) {
        Ok(()) => {}
        Err(CliError::Validation(e)) => {
            log::info!("Password generation rejected: {}", e);
            writeln!(out, "Error: {}", e)?;
        }
        Err(CliError::History(e)) => {
            log::error!("Failed to save password history: {}", e);
            writeln!(out, "Error: {}", e)?;
        }
        Err(e) => return Err(e),
    }

    writeln!(out)?;
    if prompter.confirm("Do you want to view your password history?")? {
        if let Err(e) = display_history(history, out) {
            match e {
                CliError::History(e) => {
                    log::error!("Failed to read password history: {}", e);
                    writeln!(out, "Error: {}", e)?;
                }
                other => return Err(other),
            }
        }
    }

    Ok(())
}

fn generate_and_save<P, B, W>(prompter: &mut P, history: &PasswordHistory<B>, out: &mut W) -> Result<()>
where
    P: Prompter,
    B: HistoryBackend,
    W: Write,
{
    let settings = ask_settings(prompter)?;

    if !settings.has_character_class() {
        return Err(ValidationError::NoCharacterClass.into());
    }

    let password = generate_password(&settings).map_err(ValidationError::from)?;

    writeln!(out)?;
    writeln!(out, "Generated Password: {}", style(&password).green().bold())?;

    history.append(&password, settings)?;
    writeln!(out, "Password saved to history!")?;

    Ok(())
}

fn ask_settings<P: Prompter>(prompter: &mut P) -> Result<GenerationSettings> {
    let raw_length = prompter.text("Enter password length (minimum 6):")?;
    let length = raw_length
        .trim()
        .parse::<usize>()
        .map_err(|_| ValidationError::InvalidLength(raw_length.trim().to_string()))?;

    let include_upper = prompter.confirm("Include uppercase letters?")?;
    let include_lower = prompter.confirm("Include lowercase letters?")?;
    let include_digits = prompter.confirm("Include digits?")?;
    let include_symbols = prompter.confirm("Include symbols?")?;
    let exclude_similar = prompter.confirm("Exclude similar-looking characters (e.g., O and 0)?")?;

    Ok(GenerationSettings {
        length,
        include_upper,
        include_lower,
        include_digits,
        include_symbols,
        exclude_similar,
    })
}

pub fn display_history<B, W>(history: &PasswordHistory<B>, out: &mut W) -> Result<()>
where
    B: HistoryBackend,
    W: Write,
{
    match history.load_all()? {
        Some(entries) if !entries.is_empty() => {
            writeln!(out)?;
            writeln!(out, "Password History:")?;
            for entry in &entries {
                writeln!(
                    out,
                    "Time: {}, Password: {}, Settings: {}",
                    entry.timestamp, entry.password, entry.settings
                )?;
            }
        }
        _ => {
            writeln!(out)?;
            writeln!(out, "No password history found.")?;
        }
    }
    Ok(())
}
