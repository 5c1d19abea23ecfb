//! Check command implementation.
//!
//! Validates several tag expressions at once and reports each outcome.

use tag_expression_rs::parse;
use tracing::info;

use super::{CommandContext, Result};
use crate::output::{format_check_json, format_check_text, CheckEntry};

/// Parses every expression, keeping failures alongside successes.
fn check_all(expressions: &[String]) -> Vec<CheckEntry<'_>> {
    expressions
        .iter()
        .map(|expression| CheckEntry {
            expression,
            result: parse(expression).into_result(),
        })
        .collect()
}

/// Executes the check command, returning the number of invalid expressions.
pub fn execute(ctx: &CommandContext, expressions: &[String]) -> Result<usize> {
    let entries = check_all(expressions);
    let invalid = entries.iter().filter(|entry| entry.result.is_err()).count();
    info!(checked = entries.len(), invalid, "checked expressions");

    if ctx.json_output {
        let output = format_check_json(&entries)?;
        println!("{output}");
    } else if !ctx.quiet {
        print!("{}", format_check_text(&entries, ctx.use_colors));
    }

    Ok(invalid)
}
