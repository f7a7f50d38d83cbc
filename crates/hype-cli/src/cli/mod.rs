//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use hype_core::config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hype")]
#[command(version)]
#[command(about = "AI marketing-campaign wizard for sports teams")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate a campaign non-interactively and print it as markdown
    Exec {
        /// Sports team name
        #[arg(long)]
        team: String,

        /// Access passcode
        #[arg(long)]
        passcode: String,

        /// Brief candidate to select (1 or 2)
        #[arg(long, default_value_t = 1)]
        brief: usize,

        /// Anthem genre id (see `hype genres`)
        #[arg(long, default_value = "rock-anthem")]
        genre: String,
    },

    /// List the anthem genre catalog
    Genres,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the operating mode (test or production)
    Mode {
        /// The mode to switch to
        #[arg(value_name = "MODE")]
        mode: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.command.is_none())?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

/// Installs the tracing subscriber.
///
/// Interactive runs log to a daily-rolling file under `${HYPE_HOME}/logs`
/// (stderr belongs to the TUI); non-interactive runs log to stderr. The
/// filter comes from `HYPE_LOG`, defaulting to `info`.
fn init_logging(interactive: bool) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = EnvFilter::try_from_env("HYPE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    if interactive {
        let logs_dir = config::paths::logs_dir();
        std::fs::create_dir_all(&logs_dir)
            .with_context(|| format!("create log directory {}", logs_dir.display()))?;
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::daily(logs_dir, "hype.log"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(None)
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;
    tracing::debug!(mode = config.mode.id(), "config loaded");

    // default to the interactive wizard
    let Some(command) = cli.command else {
        return commands::wizard::run(&config).await;
    };

    match command {
        Commands::Exec {
            team,
            passcode,
            brief,
            genre,
        } => {
            commands::exec::run(commands::exec::ExecRunOptions {
                config: &config,
                team: &team,
                passcode: &passcode,
                brief_choice: brief,
                genre_id: &genre,
            })
            .await
        }

        Commands::Genres => commands::genres::list(),

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Mode { mode } => commands::config::set_mode(&mode),
        },
    }
}
