//! Tag expression output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use tag_expression_rs::expression::is_operator;
use tag_expression_rs::{Expression, ExpressionResult};

/// JSON output structure for the parse command.
#[derive(Serialize)]
pub struct ParsedOutput<'a> {
    pub expression: &'a str,
    pub canonical: String,
    pub tags: Vec<&'a str>,
    pub tree: &'a Expression,
}

/// Formats a parsed expression as JSON.
pub fn format_parsed_json(input: &str, expression: &Expression) -> Result<String, serde_json::Error> {
    let output = ParsedOutput {
        expression: input,
        canonical: expression.to_canonical_string(),
        tags: expression.tags(),
        tree: expression,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a parsed expression as its canonical form followed by its tags.
pub fn format_parsed_text(expression: &Expression, use_colors: bool) -> String {
    let label = if use_colors {
        "tags:".dimmed().to_string()
    } else {
        "tags:".to_string()
    };

    format!(
        "{}\n{} {}\n",
        expression.to_canonical_string(),
        label,
        expression.tags().join(", ")
    )
}

/// JSON output structure for the eval command.
#[derive(Serialize)]
pub struct EvalOutput<'a> {
    pub expression: &'a str,
    pub canonical: String,
    pub tags: &'a [String],
    pub result: bool,
}

/// Formats an evaluation result as JSON.
pub fn format_eval_json(
    input: &str,
    expression: &Expression,
    tags: &[String],
    result: bool,
) -> Result<String, serde_json::Error> {
    let output = EvalOutput {
        expression: input,
        canonical: expression.to_canonical_string(),
        tags,
        result,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats an evaluation result as `true` or `false`.
pub fn format_eval_text(result: bool, use_colors: bool) -> String {
    match (result, use_colors) {
        (true, true) => format!("{}\n", "true".green()),
        (false, true) => format!("{}\n", "false".red()),
        (result, false) => format!("{result}\n"),
    }
}

/// JSON output structure for a single token.
#[derive(Serialize)]
pub struct TokenOutput<'a> {
    pub index: usize,
    pub token: &'a str,
    pub kind: &'static str,
}

/// JSON output structure for the tokens command.
#[derive(Serialize)]
pub struct TokensOutput<'a> {
    pub expression: &'a str,
    pub tokens: Vec<TokenOutput<'a>>,
}

fn token_kind(token: &str) -> &'static str {
    if is_operator(token) {
        "operator"
    } else if token == "(" || token == ")" {
        "parenthesis"
    } else {
        "tag"
    }
}

/// Formats a token sequence as JSON.
pub fn format_tokens_json<'a>(
    input: &'a str,
    tokens: &[&'a str],
) -> Result<String, serde_json::Error> {
    let output = TokensOutput {
        expression: input,
        tokens: tokens
            .iter()
            .enumerate()
            .map(|(index, &token)| TokenOutput {
                index,
                token,
                kind: token_kind(token),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a token sequence as one `index token` line per token.
pub fn format_tokens_text(tokens: &[&str], use_colors: bool) -> String {
    if tokens.is_empty() {
        return "No tokens.\n".to_string();
    }

    let width = (tokens.len() - 1).to_string().len();
    let mut output = String::new();

    for (index, token) in tokens.iter().enumerate() {
        let index = format!("{index:>width$}");
        let line = if use_colors {
            let token = match token_kind(token) {
                "tag" => token.to_string(),
                _ => token.cyan().to_string(),
            };
            format!("{}  {}", index.dimmed(), token)
        } else {
            format!("{}  {}", index, token)
        };
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// One validated expression for the check command.
pub struct CheckEntry<'a> {
    pub expression: &'a str,
    pub result: ExpressionResult<Expression>,
}

/// JSON output structure for a parse failure.
#[derive(Serialize)]
pub struct CheckErrorOutput {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

/// JSON output structure for one checked expression.
#[derive(Serialize)]
pub struct CheckEntryOutput<'a> {
    pub expression: &'a str,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CheckErrorOutput>,
}

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub results: Vec<CheckEntryOutput<'a>>,
    pub valid: usize,
    pub invalid: usize,
}

/// Formats check results as JSON.
pub fn format_check_json(entries: &[CheckEntry]) -> Result<String, serde_json::Error> {
    let results: Vec<CheckEntryOutput> = entries
        .iter()
        .map(|entry| match &entry.result {
            Ok(expression) => CheckEntryOutput {
                expression: entry.expression,
                valid: true,
                canonical: Some(expression.to_canonical_string()),
                error: None,
            },
            Err(error) => CheckEntryOutput {
                expression: entry.expression,
                valid: false,
                canonical: None,
                error: Some(CheckErrorOutput {
                    message: error.to_string(),
                    position: error.position(),
                }),
            },
        })
        .collect();

    let valid = results.iter().filter(|r| r.valid).count();
    let output = CheckOutput {
        invalid: results.len() - valid,
        valid,
        results,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats check results as one line per expression.
pub fn format_check_text(entries: &[CheckEntry], use_colors: bool) -> String {
    let mut output = String::new();

    for entry in entries {
        let line = match &entry.result {
            Ok(expression) => {
                let mark = if use_colors {
                    "ok".green().to_string()
                } else {
                    "ok".to_string()
                };
                format!("{mark}   {} -> {}", entry.expression, expression)
            }
            Err(error) => {
                let mark = if use_colors {
                    "err".red().bold().to_string()
                } else {
                    "err".to_string()
                };
                format!("{mark}  {}: {}", entry.expression, error)
            }
        };
        output.push_str(&line);
        output.push('\n');
    }

    output
}
