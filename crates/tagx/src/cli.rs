//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the tagx CLI.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// tagx - parse, inspect and evaluate boolean tag expressions
#[derive(Parser, Debug)]
#[command(name = "tagx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level (overrides TAGX_LOG and the config file)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse an expression and print its canonical form
    #[command(alias = "p")]
    Parse {
        /// Tag expression (e.g., "fast & !flaky")
        expression: String,
    },

    /// Evaluate an expression against a set of tags
    #[command(alias = "e")]
    Eval {
        /// Tag expression (e.g., "fast & !flaky")
        expression: String,

        /// Tag carried by the item (repeatable, or comma-separated)
        #[arg(short, long = "tag", action = ArgAction::Append, value_delimiter = ',')]
        tags: Vec<String>,

        /// Exit with status 4 when the expression does not match
        #[arg(long)]
        exit_status: bool,
    },

    /// Print the token sequence of an expression
    #[command(alias = "t")]
    Tokens {
        /// Tag expression
        expression: String,
    },

    /// Validate one or more expressions
    #[command(alias = "c")]
    Check {
        /// Tag expressions to validate
        #[arg(required = true)]
        expressions: Vec<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Log levels for the `--log-level` flag
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
