use std::str::FromStr;

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding the log filter directive (e.g. `debug`)
pub const LOG_ENV_VAR: &str = "SEMVER_LOG";

/// Environment variable selecting the log output format (`text` or `json`)
pub const LOG_FORMAT_ENV_VAR: &str = "SEMVER_LOG_FORMAT";

/// Filter used when none is configured
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

/// Logging configuration for the command-line front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Reads `SEMVER_LOG` and `SEMVER_LOG_FORMAT`, falling back to defaults
    /// for unset or unrecognised values.
    pub fn from_env() -> Self {
        log_config_with_env(
            std::env::var(LOG_ENV_VAR).ok(),
            std::env::var(LOG_FORMAT_ENV_VAR).ok(),
        )
    }
}

fn log_config_with_env(filter: Option<String>, format: Option<String>) -> LogConfig {
    let filter = filter
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    let format = format
        .and_then(|f| f.parse().ok())
        .unwrap_or_default();

    LogConfig { filter, format }
}
