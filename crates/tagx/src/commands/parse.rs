//! Parse command implementation.
//!
//! Parses a tag expression and prints its canonical form.

use tag_expression_rs::parse;

use super::{CommandContext, Result};
use crate::output::{format_parsed_json, format_parsed_text};

/// Executes the parse command.
///
/// # Errors
///
/// Returns [`super::CommandError::Parse`] if the expression is malformed.
pub fn execute(ctx: &CommandContext, expression: &str) -> Result<()> {
    let parsed = parse(expression).into_result()?;

    if ctx.json_output {
        let output = format_parsed_json(expression, &parsed)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_parsed_text(&parsed, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
