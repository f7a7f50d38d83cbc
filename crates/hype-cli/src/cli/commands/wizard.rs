//! Wizard command handler (default mode).

use anyhow::Result;
use hype_core::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    hype_tui::run_wizard(config).await
}
