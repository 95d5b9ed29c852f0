// Configuration for the portfolio TUI
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/folio/config.toml)
// 3. Built-in defaults (lowest priority)

use crate::tui::theme::ThemeKind;
use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file rotation strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogRotation {
    /// Rotate log files hourly
    Hourly,
    /// Rotate log files daily (default)
    #[default]
    Daily,
    /// Never rotate - single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "daily" => Self::Daily,
            "never" => Self::Never,
            _ => Self::Daily, // Default to daily for unknown values
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable file logging (in addition to the TUI buffer)
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file rotation strategy
    pub file_rotation: LogRotation,
    /// Prefix for log file names (e.g., "folio" -> "folio.2026-08-26.log")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false, // Opt-in feature
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "folio".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Color theme
    pub theme: ThemeKind,

    /// Play the intro sequence (hero chart, counters, particles) on start
    pub intro: bool,

    /// Animation tick interval in milliseconds
    pub tick_ms: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_rotation: Option<String>,
    file_prefix: Option<String>,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    intro: Option<bool>,
    tick_ms: Option<u64>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# folio configuration
# Uncomment and modify options as needed

# Theme: "dark" or "light" (press 't' in the TUI to toggle)
# theme = "dark"

# Play the intro sequence on start
# intro = true

# Animation tick interval in milliseconds (lower = smoother)
# tick_ms = 33

# Logging configuration
# [logging]
# level = "info"          # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false    # Also write logs to rotating files
# file_dir = "./logs"
# file_rotation = "daily" # hourly, daily, never
# file_prefix = "folio"
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// # Exits
    ///
    /// If the config file exists but cannot be parsed. This is intentional -
    /// a broken config should fail fast with a clear error, not silently
    /// fall back to defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    // Fatal error - config exists but is invalid
                    eprintln!(
                        "\n╔══════════════════════════════════════════════════════════════╗"
                    );
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!(
                        "╚══════════════════════════════════════════════════════════════╝\n"
                    );
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, delete the file and restart folio.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Config file doesn't exist - use defaults
                FileConfig::default()
            }
            Err(e) => {
                // File exists but can't be read (permissions, etc.)
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# folio configuration

# Theme: "dark" or "light" (press 't' in the TUI to toggle)
theme = "{theme}"

# Play the intro sequence on start
intro = {intro}

# Animation tick interval in milliseconds (lower = smoother)
tick_ms = {tick_ms}

# Logging configuration (RUST_LOG env var overrides the level)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_rotation = "{file_rotation}"
file_prefix = "{file_prefix}"
"#,
            theme = self.theme.name().to_lowercase(),
            intro = self.intro,
            tick_ms = self.tick_ms,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Theme: env > file > default (dark)
        let theme = std::env::var("FOLIO_THEME")
            .ok()
            .or(file.theme)
            .and_then(|s| {
                let parsed = ThemeKind::parse(&s);
                if parsed.is_none() {
                    eprintln!("Warning: Unknown theme {:?}, using dark", s);
                }
                parsed
            })
            .unwrap_or_default();

        // Intro: FOLIO_NO_INTRO env disables it, regardless of file setting
        let intro = if std::env::var("FOLIO_NO_INTRO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
        {
            false
        } else {
            file.intro.unwrap_or(true)
        };

        // Tick interval: env > file > default (33 ms, ~30fps)
        // Zero would panic the interval timer
        let tick_ms = std::env::var("FOLIO_TICK_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.tick_ms)
            .unwrap_or(33)
            .max(1);

        // Logging settings: file config, with env overrides for the
        // file sink (level itself is handled by RUST_LOG in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.level),
            file_enabled: std::env::var("FOLIO_LOG_FILE")
                .map(|v| v == "1" || v.to_lowercase() == "true")
                .ok()
                .or(file_logging.file_enabled)
                .unwrap_or(defaults.file_enabled),
            file_dir: std::env::var("FOLIO_LOG_DIR")
                .ok()
                .or(file_logging.file_dir)
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation: file_logging
                .file_rotation
                .map(|s| LogRotation::from_str(&s))
                .unwrap_or(defaults.file_rotation),
            file_prefix: file_logging.file_prefix.unwrap_or(defaults.file_prefix),
        };

        Self {
            theme,
            intro,
            tick_ms,
            logging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default(),
            intro: true,
            tick_ms: 33,
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_parse() {
        assert_eq!(LogRotation::from_str("hourly"), LogRotation::Hourly);
        assert_eq!(LogRotation::from_str("DAILY"), LogRotation::Daily);
        assert_eq!(LogRotation::from_str("Never"), LogRotation::Never);
        assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
    }

    #[test]
    fn test_file_config_parse() {
        let doc = r#"
            theme = "light"
            intro = false
            tick_ms = 16

            [logging]
            level = "debug"
            file_enabled = true
            file_rotation = "hourly"
        "#;
        let file: FileConfig = toml::from_str(doc).unwrap();
        assert_eq!(file.theme.as_deref(), Some("light"));
        assert_eq!(file.intro, Some(false));
        assert_eq!(file.tick_ms, Some(16));
        let logging = file.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("debug"));
        assert_eq!(logging.file_enabled, Some(true));
        assert_eq!(logging.file_rotation.as_deref(), Some("hourly"));
        assert!(logging.file_dir.is_none());
    }

    #[test]
    fn test_empty_file_config() {
        let file: FileConfig = toml::from_str("").unwrap();
        assert!(file.theme.is_none());
        assert!(file.intro.is_none());
        assert!(file.tick_ms.is_none());
        assert!(file.logging.is_none());
    }

    #[test]
    fn test_type_mismatch_rejected() {
        // Unknown keys parse fine (forward compatibility), but a type
        // mismatch on a known key must fail
        assert!(toml::from_str::<FileConfig>("tick_ms = \"fast\"").is_err());
    }

    #[test]
    fn test_default_to_toml_roundtrip() {
        let config = Config::default();
        let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();

        assert_eq!(file.theme.as_deref(), Some("dark"));
        assert_eq!(file.intro, Some(true));
        assert_eq!(file.tick_ms, Some(33));

        let logging = file.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.file_enabled, Some(false));
        assert_eq!(logging.file_rotation.as_deref(), Some("daily"));
        assert_eq!(logging.file_prefix.as_deref(), Some("folio"));
    }
}
