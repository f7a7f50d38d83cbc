//! Config command handlers.

use anyhow::{Context, Result};
use hype_core::config::{AppMode, Config, paths};

pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let path = paths::config_path();
    Config::init(&path)?;
    println!("Created config at {}", path.display());
    Ok(())
}

pub fn set_mode(mode: &str) -> Result<()> {
    let mode = AppMode::from_id(mode)
        .with_context(|| format!("unknown mode '{mode}' (expected test or production)"))?;
    Config::save_mode(mode)?;
    println!("Mode set to {}", mode.id());
    Ok(())
}
