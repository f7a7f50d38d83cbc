//! Configuration management for hype.
//!
//! Loads configuration from ${HYPE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Operating mode for the generation pipeline.
///
/// Test mode never touches the network: every generation step is served by
/// the local deterministic generators with simulated latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    /// Local deterministic generators (default)
    #[default]
    Test,
    /// Call the configured generative services
    Production,
}

impl AppMode {
    /// Returns the string identifier used in the config file.
    pub fn id(&self) -> &'static str {
        match self {
            AppMode::Test => "test",
            AppMode::Production => "production",
        }
    }

    /// Returns the `AppMode` for a given id string.
    pub fn from_id(id: &str) -> Option<AppMode> {
        match id.to_lowercase().as_str() {
            "test" => Some(AppMode::Test),
            "production" | "prod" => Some(AppMode::Production),
            _ => None,
        }
    }
}

/// Brief Service configuration (chat-completions endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefServiceConfig {
    /// Base URL override (env `BRIEF_BASE_URL` wins over this).
    pub base_url: Option<String>,
    /// API key (falls back to the `BRIEF_API_KEY` environment variable).
    pub api_key: Option<String>,
    /// Model used for brief generation.
    pub model: String,
    /// Model used to summarize a brief into an image prompt.
    pub summary_model: String,
    /// Maximum tokens per completion.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for BriefServiceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            model: "gpt-4.1".to_string(),
            summary_model: "gpt-4o-mini".to_string(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// Visual Service configuration (submit-and-poll image generation).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualServiceConfig {
    /// Base URL override (env `VISUAL_BASE_URL` wins over this).
    pub base_url: Option<String>,
    /// API key (falls back to the `VISUAL_API_KEY` environment variable).
    pub api_key: Option<String>,
    /// Generation model id submitted with each job.
    pub model_id: String,
    pub width: u32,
    pub height: u32,
    /// Number of poll attempts before the job counts as timed out.
    pub poll_attempts: u32,
    /// Interval between poll attempts, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for VisualServiceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            model_id: "de7d3faf-762f-48e0-b3b7-9d0ac3a3fcf3".to_string(),
            width: 1792,
            height: 1024,
            poll_attempts: 6,
            poll_interval_ms: 5000,
        }
    }
}

impl VisualServiceConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Audio Service configuration (anthem track library).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioServiceConfig {
    /// Base URL of the track library. When unset, the deterministic
    /// placeholder track is served even in production mode.
    pub library_base_url: Option<String>,
}

/// Per-service configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub brief: BriefServiceConfig,
    pub visual: VisualServiceConfig,
    pub audio: AudioServiceConfig,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Operating mode for generation.
    pub mode: AppMode,

    /// Simulated latency base for test-mode generation, in milliseconds.
    pub simulated_delay_ms: u64,

    /// Generative service configuration.
    #[serde(default)]
    pub services: ServicesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: AppMode::default(),
            simulated_delay_ms: Self::DEFAULT_SIMULATED_DELAY_MS,
            services: ServicesConfig::default(),
        }
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// This ensures new comments/sections from the template are always present,
/// while preserving user's customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for hype configuration and data directories.
    //!
    //! HYPE_HOME resolution order:
    //! 1. HYPE_HOME environment variable (if set)
    //! 2. ~/.config/hype (default)

    use std::path::PathBuf;

    /// Returns the hype home directory.
    ///
    /// Checks HYPE_HOME env var first, falls back to ~/.config/hype
    pub fn hype_home() -> PathBuf {
        if let Ok(home) = std::env::var("HYPE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("hype"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        hype_home().join("config.toml")
    }

    /// Returns the directory for rolling log files.
    pub fn logs_dir() -> PathBuf {
        hype_home().join("logs")
    }
}

impl Config {
    const DEFAULT_SIMULATED_DELAY_MS: u64 = 2000;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the simulated latency base for test-mode generation.
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    /// Saves only the mode field to the config file.
    ///
    /// Creates the file if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_mode(mode: AppMode) -> Result<()> {
        Self::save_mode_to(&paths::config_path(), mode)
    }

    /// Saves only the mode field to a specific config file path.
    ///
    /// Creates the file with default template if it doesn't exist.
    /// If file exists, merges user values into the latest template.
    pub fn save_mode_to(path: &Path, mode: AppMode) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["mode"] = value(mode.id());

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.mode, AppMode::Test);
        assert_eq!(config.simulated_delay_ms, 2000);
        assert_eq!(config.services.brief.model, "gpt-4.1");
        assert_eq!(config.services.visual.poll_attempts, 6);
        assert!(config.services.audio.library_base_url.is_none());
    }

    #[test]
    fn test_default_template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.mode, AppMode::Test);
        assert_eq!(config.services.visual.width, 1792);
        assert_eq!(config.services.brief.summary_model, "gpt-4o-mini");
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "mode = \"production\"\n[services.brief]\nmodel = \"gpt-5\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.mode, AppMode::Production);
        assert_eq!(config.services.brief.model, "gpt-5");
        // untouched sections keep their defaults
        assert_eq!(config.services.visual.height, 1024);
    }

    #[test]
    fn test_save_mode_preserves_user_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "simulated_delay_ms = 10\n").unwrap();

        Config::save_mode_to(&path, AppMode::Production).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.mode, AppMode::Production);
        assert_eq!(config.simulated_delay_ms, 10);
    }

    #[test]
    fn test_save_mode_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::save_mode_to(&path, AppMode::Production).unwrap();

        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("mode = \"production\""));
        // template comments survive
        assert!(contents.contains("hype configuration"));
    }

    #[test]
    fn test_mode_id_roundtrip() {
        assert_eq!(AppMode::from_id("test"), Some(AppMode::Test));
        assert_eq!(AppMode::from_id("PRODUCTION"), Some(AppMode::Production));
        assert_eq!(AppMode::from_id("prod"), Some(AppMode::Production));
        assert_eq!(AppMode::from_id("demo"), None);
    }
}
