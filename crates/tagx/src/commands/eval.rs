//! Eval command implementation.
//!
//! Evaluates a tag expression against the tags given on the command line.

use std::collections::HashSet;

use tag_expression_rs::parse;
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_eval_json, format_eval_text};

/// Options for the eval command.
pub struct EvalOptions<'a> {
    /// Tag expression.
    pub expression: &'a str,
    /// Tags carried by the item being matched.
    pub tags: &'a [String],
}

/// Executes the eval command, returning whether the expression matched.
///
/// # Errors
///
/// Returns [`super::CommandError::Parse`] if the expression is malformed.
pub fn execute(ctx: &CommandContext, opts: &EvalOptions) -> Result<bool> {
    let expression = parse(opts.expression).into_result()?;
    let tags = collect_tags(opts.tags);
    if ctx.verbose {
        eprintln!("Evaluating {} against {} tag(s)", expression, tags.len());
    }
    let result = expression.evaluate(&tags);
    debug!(expression = %expression, tags = tags.len(), result, "evaluated expression");

    if ctx.json_output {
        let output = format_eval_json(opts.expression, &expression, opts.tags, result)?;
        println!("{output}");
    } else if !ctx.quiet {
        print!("{}", format_eval_text(result, ctx.use_colors));
    }

    Ok(result)
}

/// Builds the tag set, dropping blanks left by stray commas.
fn collect_tags(tags: &[String]) -> HashSet<&str> {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect()
}
