//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Each command reports its own exit status: `check` fails when any
//! expression is invalid and `eval --exit-status` fails on a non-match.

use std::process::ExitCode;

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Exit status for `eval --exit-status` when the expression does not match.
pub const NO_MATCH_EXIT_CODE: u8 = 4;

/// Exit status for `check` when at least one expression is invalid.
pub const INVALID_EXIT_CODE: u8 = 1;

/// Trait for commands routed from the parsed CLI.
pub trait Command {
    /// Execute the command, returning the process exit status on success.
    fn execute(&self, ctx: &CommandContext) -> Result<u8>;
}

/// Commands the CLI can route to.
pub enum Dispatch<'a> {
    Parse {
        expression: &'a str,
    },
    Eval {
        expression: &'a str,
        tags: &'a [String],
        exit_status: bool,
    },
    Tokens {
        expression: &'a str,
    },
    Check {
        expressions: &'a [String],
    },
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> Dispatch<'a> {
    /// Create a dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            Some(Commands::Parse { expression }) => Self::Parse { expression },
            Some(Commands::Eval {
                expression,
                tags,
                exit_status,
            }) => Self::Eval {
                expression,
                tags,
                exit_status: *exit_status,
            },
            Some(Commands::Tokens { expression }) => Self::Tokens { expression },
            Some(Commands::Check { expressions }) => Self::Check { expressions },
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(shell),
            None => Self::Help,
        }
    }
}

impl Command for Dispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<u8> {
        match self {
            Self::Parse { expression } => commands::parse::execute(ctx, expression).map(|()| 0),
            Self::Eval {
                expression,
                tags,
                exit_status,
            } => {
                let opts = commands::eval::EvalOptions { expression, tags };
                let matched = commands::eval::execute(ctx, &opts)?;
                Ok(eval_exit_code(matched, *exit_status))
            }
            Self::Tokens { expression } => commands::tokens::execute(ctx, expression).map(|()| 0),
            Self::Check { expressions } => {
                let invalid = commands::check::execute(ctx, expressions)?;
                Ok(if invalid == 0 { 0 } else { INVALID_EXIT_CODE })
            }
            Self::Config(command) => dispatch_config(ctx, command).map(|()| 0),
            Self::Completions(shell) => commands::completions::execute(shell)
                .map(|()| 0)
                .map_err(CommandError::Io),
            Self::Help => {
                if !ctx.quiet {
                    println!("tagx - tag expression tool");
                    println!("Use --help for usage information");
                }
                Ok(0)
            }
        }
    }
}

impl Dispatch<'_> {
    /// Executes the command and converts its status into an [`ExitCode`].
    pub fn run(&self, ctx: &CommandContext) -> Result<ExitCode> {
        self.execute(ctx).map(ExitCode::from)
    }
}

fn eval_exit_code(matched: bool, exit_status: bool) -> u8 {
    if exit_status && !matched {
        NO_MATCH_EXIT_CODE
    } else {
        0
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}
