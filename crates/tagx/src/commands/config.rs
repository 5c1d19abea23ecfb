//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/tagx/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CommandContext, CommandError, Result};
use crate::cli::LogLevel;

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "TAGX_CONFIG";

/// Keys accepted by `tagx config set`.
const VALID_KEYS: &str = "log_level, output.color, output.json";

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default log level when neither `--log-level` nor `TAGX_LOG` is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: None,
            output: OutputConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,

    /// Emit JSON without passing `--json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

/// Gets the config file path.
///
/// `$TAGX_CONFIG` wins, then `$XDG_CONFIG_HOME/tagx/config.toml`, then
/// `~/.config/tagx/config.toml` on all platforms.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("tagx").join("config.toml"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("tagx").join("config.toml"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Loads the configuration from disk.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    // Version 1 is the initial schema.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<PathBuf> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(path)
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("Settings:");
            if let Some(ref level) = config.log_level {
                println!("  log_level: {}", level);
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }
            if let Some(json) = config.output.json {
                println!("  json: {}", json);
            }
        } else {
            println!("(No config file exists. Run 'tagx config set <KEY> <VALUE>' to create one.)");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies a single `key = value` assignment to the config.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let (section, field) = match key.split_once('.') {
        Some((section, field)) => (Some(section), field),
        None => (None, key),
    };

    match (section, field) {
        (None, "log_level") => {
            let level = LogLevel::from_str(value, true).map_err(|_| {
                CommandError::Config(format!(
                    "Invalid log_level value '{}'. Valid values: trace, debug, info, warn, error",
                    value
                ))
            })?;
            config.log_level = Some(level.as_filter_str().to_string());
        }
        (Some("output"), "color") => {
            config.output.color = Some(parse_bool(value)?);
        }
        (Some("output"), "json") => {
            config.output.json = Some(parse_bool(value)?);
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}",
                key, VALID_KEYS
            )));
        }
    }

    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    apply_setting(&mut config, &opts.key, &opts.value)?;
    let path = save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Points `TAGX_CONFIG` at a file inside a fresh temporary directory.
    fn with_config_file<F: FnOnce(&std::path::Path)>(contents: Option<&str>, f: F) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        if let Some(contents) = contents {
            fs::write(&path, contents).unwrap();
        }

        let previous = env::var_os(CONFIG_ENV_VAR);
        env::set_var(CONFIG_ENV_VAR, &path);
        f(&path);
        match previous {
            Some(value) => env::set_var(CONFIG_ENV_VAR, value),
            None => env::remove_var(CONFIG_ENV_VAR),
        }
    }

    #[test]
    fn test_parse_bool_true_values() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("True").unwrap());
        assert!(parse_bool("yes").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(parse_bool("on").unwrap());
    }

    #[test]
    fn test_parse_bool_false_values() {
        assert!(!parse_bool("false").unwrap());
        assert!(!parse_bool("FALSE").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(!parse_bool("off").unwrap());
    }

    #[test]
    fn test_parse_bool_invalid() {
        assert!(parse_bool("maybe").is_err());
        assert!(parse_bool("").is_err());
        assert!(parse_bool("2").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.log_level.is_none());
        assert!(config.output.color.is_none());
        assert!(config.output.json.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            version: CONFIG_VERSION,
            log_level: Some("debug".to_string()),
            output: OutputConfig {
                color: Some(true),
                json: None,
            },
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 1"));
        assert!(toml_str.contains("log_level = \"debug\""));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("color = true"));
        assert!(!toml_str.contains("json"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
version = 1
log_level = "info"

[output]
color = false
json = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.output.json, Some(true));
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config: Config = toml::from_str("").unwrap();
        // Missing version defaults to current version
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_migrate_config_preserves_data() {
        let config = Config {
            version: 1,
            log_level: Some("trace".to_string()),
            output: OutputConfig {
                color: Some(false),
                json: Some(true),
            },
        };

        let migrated = migrate_config(config).unwrap();
        assert_eq!(migrated.version, CONFIG_VERSION);
        assert_eq!(migrated.log_level.as_deref(), Some("trace"));
        assert_eq!(migrated.output.color, Some(false));
        assert_eq!(migrated.output.json, Some(true));
    }

    #[test]
    fn test_apply_setting_log_level_is_normalized() {
        let mut config = Config::default();
        apply_setting(&mut config, "log_level", "DEBUG").unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_apply_setting_rejects_bad_values() {
        let mut config = Config::default();
        assert!(apply_setting(&mut config, "log_level", "loud").is_err());
        assert!(apply_setting(&mut config, "output.color", "maybe").is_err());
        assert!(config.log_level.is_none());
        assert!(config.output.color.is_none());
    }

    #[test]
    fn test_apply_setting_unknown_key() {
        let mut config = Config::default();
        let err = apply_setting(&mut config, "output.theme", "dark").unwrap_err();
        assert!(err.to_string().contains("Unknown config key 'output.theme'"));
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        with_config_file(None, |path| {
            assert_eq!(get_config_path().unwrap(), path);
        });
    }

    #[test]
    #[serial]
    fn test_load_missing_config_uses_defaults() {
        with_config_file(None, |_| {
            let config = load_config().unwrap();
            assert_eq!(config.version, CONFIG_VERSION);
            assert!(config.output.json.is_none());
        });
    }

    #[test]
    #[serial]
    fn test_load_invalid_config_is_config_error() {
        with_config_file(Some("log_level = ["), |_| {
            let err = load_config().unwrap_err();
            assert!(matches!(err, CommandError::Config(_)));
        });
    }

    #[test]
    #[serial]
    fn test_save_then_load_round_trips_settings() {
        with_config_file(None, |path| {
            let mut config = Config::default();
            apply_setting(&mut config, "output.json", "yes").unwrap();
            assert_eq!(save_config(&config).unwrap(), path);

            let loaded = load_config().unwrap();
            assert_eq!(loaded.output.json, Some(true));
        });
    }
}
