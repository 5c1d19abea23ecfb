//! Tokenizer for tag expressions.

/// The characters that always form a token of their own.
pub const RESERVED_SYMBOLS: [char; 5] = ['(', ')', '!', '&', '|'];

/// Tokenizer for splitting a tag expression into tokens.
///
/// Every reserved symbol becomes a standalone token; the remaining text is
/// split on runs of whitespace. Tokens borrow from the input and are never
/// empty. A token's position is its index in the returned sequence.
///
/// Any Unicode whitespace separates tokens, including U+00A0 NO-BREAK SPACE.
pub struct Tokenizer<'a> {
    input: &'a str,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Splits the input into tokens.
    pub fn tokenize(&self) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        for word in self.input.split_whitespace() {
            let mut rest = word;
            while let Some(index) = rest.find(RESERVED_SYMBOLS) {
                let (tag, tail) = rest.split_at(index);
                if !tag.is_empty() {
                    tokens.push(tag);
                }
                // Reserved symbols are all single-byte ASCII.
                let (symbol, tail) = tail.split_at(1);
                tokens.push(symbol);
                rest = tail;
            }
            if !rest.is_empty() {
                tokens.push(rest);
            }
        }
        tokens
    }
}

/// Tokenizes an optional input; `None` yields no tokens.
pub fn tokenize(input: Option<&str>) -> Vec<&str> {
    input
        .map(|text| Tokenizer::new(text).tokenize())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_none_is_empty() {
        assert!(tokenize(None).is_empty());
    }

    #[test]
    fn test_tokenize_blank_is_empty() {
        assert!(tokenize(Some("")).is_empty());
        assert!(tokenize(Some("   \t\n ")).is_empty());
    }

    #[test]
    fn test_tokenize_single_tag() {
        assert_eq!(tokenize(Some("foo")), vec!["foo"]);
        assert_eq!(tokenize(Some("  foo  ")), vec!["foo"]);
    }

    #[test]
    fn test_tokenize_symbols_without_spaces() {
        assert_eq!(
            tokenize(Some("(foo&!bar)|baz")),
            vec!["(", "foo", "&", "!", "bar", ")", "|", "baz"]
        );
    }

    #[test]
    fn test_tokenize_symbols_with_spaces() {
        assert_eq!(
            tokenize(Some("( ! foo & bar | baz)")),
            vec!["(", "!", "foo", "&", "bar", "|", "baz", ")"]
        );
    }

    #[test]
    fn test_tokenize_adjacent_symbols() {
        assert_eq!(tokenize(Some("!!foo")), vec!["!", "!", "foo"]);
        assert_eq!(tokenize(Some("((")), vec!["(", "("]);
        assert_eq!(tokenize(Some("&|")), vec!["&", "|"]);
    }

    #[test]
    fn test_tokenize_splits_words_on_whitespace() {
        // Multi-word tags are not supported; each word is its own token.
        assert_eq!(tokenize(Some("foo bar")), vec!["foo", "bar"]);
        assert_eq!(tokenize(Some("foo\tbar\nbaz")), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_tokenize_keeps_tag_punctuation() {
        assert_eq!(
            tokenize(Some("db-heavy & v2.1 | @nightly")),
            vec!["db-heavy", "&", "v2.1", "|", "@nightly"]
        );
    }

    #[test]
    fn test_tokenize_unicode_tags() {
        assert_eq!(tokenize(Some("größe&!日本")), vec!["größe", "&", "!", "日本"]);
    }

    #[test]
    fn test_tokenize_splits_on_unicode_whitespace() {
        assert_eq!(tokenize(Some("db\u{a0}heavy")), vec!["db", "heavy"]);
        assert_eq!(tokenize(Some("a\u{2003}&\u{3000}b")), vec!["a", "&", "b"]);
    }

    #[test]
    fn test_tokenize_never_emits_empty_tokens() {
        for input in ["", " ", "( )", " & ", "a  |  b", "!(", ") ("] {
            assert!(
                tokenize(Some(input)).iter().all(|token| !token.is_empty()),
                "empty token produced for {input:?}"
            );
        }
    }
}
