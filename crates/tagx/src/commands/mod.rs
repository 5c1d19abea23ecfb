//! Command implementations for the tagx CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod check;
pub mod completions;
pub mod config;
pub mod eval;
pub mod parse;
pub mod tokens;

use std::io::IsTerminal;

use tag_expression_rs::ParseError;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Tag expression parsing error.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Returns the error code string for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::Parse(_) => "PARSE_ERROR",
            CommandError::Config(_) => "CONFIG_ERROR",
            CommandError::Io(_) => "IO_ERROR",
            CommandError::Json(_) => "JSON_ERROR",
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Parse(_) => 1,
            CommandError::Config(_) => 5,
            CommandError::Io(_) => 3,
            CommandError::Json(_) => 1,
        }
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a command context from CLI arguments and the loaded config.
    ///
    /// Flags win over config values.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            json_output: cli.json || config.output.json.unwrap_or(false),
            use_colors: colors_enabled(
                cli.no_color,
                config.output.color,
                std::env::var_os("NO_COLOR").is_some(),
                std::io::stdout().is_terminal(),
            ),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// Decides whether colored output is used.
fn colors_enabled(
    no_color_flag: bool,
    config_color: Option<bool>,
    no_color_env: bool,
    stdout_is_terminal: bool,
) -> bool {
    if no_color_flag || no_color_env || !stdout_is_terminal {
        return false;
    }
    config_color.unwrap_or(true)
}
