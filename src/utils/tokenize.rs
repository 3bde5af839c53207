use crate::types::TokenRef;

/// Splits a line of text into raw tokens on any run of whitespace.
///
/// Tokens never contain whitespace, and no empty tokens are produced. Tokens are returned
/// verbatim; normalization is left to `WordNormalizer`.
///
/// ```
/// use word_tally::tokenize;
///
/// let tokens: Vec<&str> = tokenize("  The cat\tsat. ").collect();
/// assert_eq!(tokens, vec!["The", "cat", "sat."]);
/// ```
pub fn tokenize(line: &str) -> impl Iterator<Item = &TokenRef> {
    line.split_whitespace()
}
