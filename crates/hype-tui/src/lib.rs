//! Full-screen TUI implementation of the campaign wizard.

pub mod common;
pub mod effects;
pub mod events;
pub mod markdown;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use hype_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive campaign wizard.
pub async fn run_wizard(config: &Config) -> Result<()> {
    // The wizard requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The wizard requires a terminal.\n\
             Use `hype exec --team '...' --passcode '...'` for non-interactive runs."
        );
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "hype - AI Campaign Generator")?;
    writeln!(err, "Mode: {}", config.mode.id())?;
    let config_path = hype_core::config::paths::config_path();
    if config_path.exists() {
        writeln!(err, "Config file: {}", config_path.display())?;
    }
    err.flush()?;

    let mut runtime = TuiRuntime::new(config.clone())?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
