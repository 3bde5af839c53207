use crate::types::{CanonicalWord, TokenRef};
use regex::Regex;
use std::sync::LazyLock;

// Everything except letters, numbers, underscores and whitespace. Combining marks are
// neither letters nor numbers, so they are stripped too.
static NON_WORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("Invalid word character pattern"));

/// Converts raw tokens into the canonical form used as counting keys.
#[derive(Debug, Clone, Copy)]
pub struct WordNormalizer {
    /// When set, tokens are only trimmed. Case and punctuation are kept as-is.
    case_sensitive: bool,
}

impl WordNormalizer {
    /// Creates a normalizer which folds case and strips punctuation.
    pub fn case_insensitive() -> Self {
        Self {
            case_sensitive: false,
        }
    }

    /// Creates a normalizer which keeps tokens verbatim apart from trimming.
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
        }
    }

    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Normalizes a single token.
    ///
    /// # Arguments
    /// * `token` - The raw token to normalize.
    ///
    /// # Returns
    /// * `Some(word)` with the canonical word, or `None` if nothing word-like remains.
    pub fn normalize(&self, token: &TokenRef) -> Option<CanonicalWord> {
        let word: CanonicalWord = if self.case_sensitive {
            token.trim().to_string()
        } else {
            NON_WORD_CHARS
                .replace_all(&token.to_lowercase(), "")
                .trim()
                .to_string()
        };

        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }
}

/// Normalizes `token` without constructing a `WordNormalizer` first.
///
/// ```
/// use word_tally::normalize;
///
/// assert_eq!(normalize("Hello,", false), Some("hello".to_string()));
/// assert_eq!(normalize("Hello,", true), Some("Hello,".to_string()));
/// assert_eq!(normalize("--", false), None);
/// ```
pub fn normalize(token: &TokenRef, case_sensitive: bool) -> Option<CanonicalWord> {
    WordNormalizer::new(case_sensitive).normalize(token)
}
