//! Output formatting utilities for the tagx CLI.
//!
//! - [`expression`] - Parse, eval, tokens and check output (JSON and text)

mod expression;

pub use expression::{
    format_check_json, format_check_text, format_eval_json, format_eval_text,
    format_parsed_json, format_parsed_text, format_tokens_json, format_tokens_text, CheckEntry,
};
