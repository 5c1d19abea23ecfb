//! Structured logging with environment variable configuration.
//!
//! Logs are written to stderr so that stdout only carries command output.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Environment variable holding a log filter directive.
pub const LOG_ENV_VAR: &str = "TAGX_LOG";

/// Level used when nothing else selects one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Chooses the filter directive.
///
/// Precedence (highest to lowest):
///
/// 1. `--log-level`
/// 2. `--verbose` (debug) or `--quiet` (error)
/// 3. `TAGX_LOG`
/// 4. `log_level` from the config file
/// 5. [`DEFAULT_LOG_LEVEL`]
pub fn resolve_directive(
    flag: Option<LogLevel>,
    verbose: bool,
    quiet: bool,
    env: Option<String>,
    config_level: Option<&str>,
) -> String {
    if let Some(level) = flag {
        return level.as_filter_str().to_string();
    }
    if verbose {
        return LogLevel::Debug.as_filter_str().to_string();
    }
    if quiet {
        return LogLevel::Error.as_filter_str().to_string();
    }

    env.filter(|directive| !directive.trim().is_empty())
        .or_else(|| config_level.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

fn filter_from_directive(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Initialise the logging subsystem with the given filter directive.
///
/// An unparsable directive falls back to [`DEFAULT_LOG_LEVEL`]. If a global
/// subscriber is already set this silently does nothing.
pub fn init_logging(directive: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_directive(directive))
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    // The first subscriber wins.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let directive = resolve_directive(
            Some(LogLevel::Trace),
            true,
            false,
            Some("info".to_string()),
            Some("error"),
        );
        assert_eq!(directive, "trace");
    }

    #[test]
    fn test_verbose_and_quiet() {
        assert_eq!(resolve_directive(None, true, false, Some("info".into()), None), "debug");
        assert_eq!(resolve_directive(None, false, true, Some("info".into()), None), "error");
    }

    #[test]
    fn test_env_beats_config() {
        let directive = resolve_directive(
            None,
            false,
            false,
            Some("tag_expression_rs=trace".to_string()),
            Some("info"),
        );
        assert_eq!(directive, "tag_expression_rs=trace");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        assert_eq!(resolve_directive(None, false, false, Some("  ".into()), Some("info")), "info");
    }

    #[test]
    fn test_default_level() {
        assert_eq!(resolve_directive(None, false, false, None, None), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_invalid_directive_falls_back() {
        let filter = filter_from_directive("tagx=loudest");
        assert_eq!(filter.to_string(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        // The global subscriber outlives this test; keep it silent.
        init_logging("off");
        init_logging("off");
    }

    #[test]
    fn test_filter_from_directive_keeps_valid_directive() {
        let filter = filter_from_directive("tag_expression_rs=trace");
        assert_eq!(filter.to_string(), "tag_expression_rs=trace");
    }
}
