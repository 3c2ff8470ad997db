//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quiz/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::Level;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub quiz: QuizSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizSection {
    pub csv: Option<String>,
    pub timer: Option<u64>,
    pub color: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingSection {
    pub file: Option<String>,
    pub level: Option<String>,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub csv: Option<String>,
    pub timer: Option<u64>,
    pub no_color: bool,
}

/// Messages raised while settling the config, before the logger exists.
///
/// `main` replays them once logging is up and echoes warnings to stderr.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<(Level, String)>,
}

impl Diagnostics {
    pub fn info(&mut self, message: impl Into<String>) {
        self.entries.push((Level::Info, message.into()));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.entries.push((Level::Warn, message.into()));
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.as_str())
    }

    /// Sends every collected message to the `log` facade.
    pub fn replay(&self) {
        for (level, message) in &self.entries {
            log::log!(*level, "{}", message);
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CSV_PATH: &str = "problems.csv";
pub const DEFAULT_TIMER_SECS: u64 = 30;
pub const DEFAULT_LOG_FILE: &str = "quiz.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub csv_path: PathBuf,
    pub timer_secs: u64,
    pub color: bool,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl ResolvedConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.timer_secs)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quiz/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quiz").join("config.toml"))
}

/// Load config from `~/.quiz/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuizConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(diagnostics: &mut Diagnostics) -> Result<QuizConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            diagnostics.warn("Could not determine home directory, using default config");
            return Ok(QuizConfig::default());
        }
    };

    if !path.exists() {
        diagnostics.info(format!(
            "No config file found, generating default at {}",
            path.display()
        ));
        if let Err(e) = generate_default_config(&path) {
            diagnostics.warn(format!("Failed to write default config: {e}"));
        }
        return Ok(QuizConfig::default());
    }

    let config = load_config_from(&path)?;
    diagnostics.info(format!("Loaded config from {}: {:?}", path.display(), config));
    Ok(config)
}

/// Parse a config file at an explicit location.
pub fn load_config_from(path: &Path) -> Result<QuizConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Quiz Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [quiz]
# csv = "problems.csv"     # Or set QUIZ_CSV, or pass --csv
# timer = 30               # Seconds. Or set QUIZ_TIMER, or pass --timer
# color = true             # NO_COLOR env var or --no-color turn this off

# [logging]
# file = "quiz.log"
# level = "info"           # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// Anything skipped along the way is recorded in `diagnostics`.
pub fn resolve(
    config: &QuizConfig,
    cli: &CliOverrides,
    diagnostics: &mut Diagnostics,
) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok(), diagnostics)
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env<F>(
    config: &QuizConfig,
    cli: &CliOverrides,
    env: F,
    diagnostics: &mut Diagnostics,
) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Question file: CLI → env → config → default
    let csv_path = cli
        .csv
        .clone()
        .or_else(|| env("QUIZ_CSV"))
        .or_else(|| config.quiz.csv.clone())
        .unwrap_or_else(|| DEFAULT_CSV_PATH.to_string());

    // Timer: CLI → env → config → default, skipping zero or garbage
    let env_timer = env("QUIZ_TIMER").and_then(|raw| match raw.trim().parse::<u64>() {
        Ok(secs) => Some(secs),
        Err(e) => {
            diagnostics.warn(format!("Ignoring QUIZ_TIMER={raw:?}: {e}"));
            None
        }
    });
    let timer_secs = [cli.timer, env_timer, config.quiz.timer]
        .into_iter()
        .flatten()
        .find(|&secs| {
            if secs == 0 {
                diagnostics.warn("Ignoring zero-second timer");
            }
            secs > 0
        })
        .unwrap_or(DEFAULT_TIMER_SECS);

    // Color: any "off" switch wins
    let color = !cli.no_color && env("NO_COLOR").is_none() && config.quiz.color.unwrap_or(true);

    let log_file = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Log level: env → config → default
    let log_level = env("QUIZ_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .and_then(|raw| match LevelFilter::from_str(raw.trim()) {
            Ok(level) => Some(level),
            Err(_) => {
                diagnostics.warn(format!("Unknown log level {raw:?}, using default"));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        csv_path: PathBuf::from(csv_path),
        timer_secs,
        color,
        log_file: PathBuf::from(log_file),
        log_level,
    }
}
