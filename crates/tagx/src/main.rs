use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod logging;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::Dispatch;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is not installed yet, so a broken config is reported directly.
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => return report_error(&e, cli.json),
    };

    let directive = logging::resolve_directive(
        cli.log_level,
        cli.verbose,
        cli.quiet,
        std::env::var(logging::LOG_ENV_VAR).ok(),
        config.log_level.as_deref(),
    );
    logging::init_logging(&directive);

    let ctx = CommandContext::new(&cli, &config);
    match Dispatch::from_cli(&cli).run(&ctx) {
        Ok(code) => code,
        Err(e) => report_error(&e, ctx.json_output),
    }
}

/// Prints an error to stderr and returns its exit code.
fn report_error(e: &CommandError, json: bool) -> ExitCode {
    tracing::debug!(code = e.code(), "command failed");

    let error_json = serde_json::json!({
        "error": {
            "code": e.code(),
            "message": e.to_string(),
        }
    });

    match serde_json::to_string_pretty(&error_json) {
        Ok(rendered) if json => eprintln!("{rendered}"),
        _ => eprintln!("Error: {e}"),
    }
    ExitCode::from(e.exit_code())
}
