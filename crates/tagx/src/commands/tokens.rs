//! Tokens command implementation.
//!
//! Prints the token sequence an expression is split into, with the positions
//! used by parse error messages.

use tag_expression_rs::expression::Tokenizer;

use super::{CommandContext, Result};
use crate::output::{format_tokens_json, format_tokens_text};

/// Executes the tokens command.
///
/// Tokenizing never fails, so malformed expressions are printed as well.
pub fn execute(ctx: &CommandContext, expression: &str) -> Result<()> {
    let tokens = Tokenizer::new(expression).tokenize();

    if ctx.json_output {
        let output = format_tokens_json(expression, &tokens)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_tokens_text(&tokens, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
