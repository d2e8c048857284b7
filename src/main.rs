use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::Context;

mod cli;
mod core;
mod generators;
mod history;
mod models;

use crate::cli::InquirePrompter;
use crate::core::config::Config;
use crate::history::{JsonFileBackend, PasswordHistory};

fn logger_builder(config: &Config) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);
    builder
}

// Log to the configured file, or stderr when none is set
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = logger_builder(config);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
        let file = File::options()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("opening log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("installing logger")?;
    Ok(())
}

fn main() {
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let config = Config::load();

    if let Err(e) = init_logging(&config) {
        // Fall back to stderr so the session still runs
        let _ = logger_builder(&config).try_init();
        log::warn!("Logging to stderr instead: {:#}", e);
    }

    log::info!("Starting password generator, history at {}", config.history_file.display());

    let history = PasswordHistory::new(JsonFileBackend::new(&config.history_file));
    let mut prompter = InquirePrompter;
    let mut stdout = io::stdout();

    // Every outcome exits with status 0
    if let Err(e) = cli::run_session(&mut prompter, &history, &mut stdout) {
        log::error!("Session ended early: {}", e);
        eprintln!("\n❌ {}", e);
    }

    log::info!("Password generator finished");
}
