use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English function words excluded from counting when common words are ignored.
pub const STOP_WORD_LIST: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "this", "that", "these", "those", "i",
    "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his",
    "its", "our", "their",
];

/// Lookup set over `STOP_WORD_LIST`. Entries are lowercase.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Path argument which selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Display name used in messages when reading from standard input.
pub const STDIN_DISPLAY_NAME: &str = "<stdin>";

/// File extension which marks an input as gzip-compressed.
pub const GZIP_EXTENSION: &str = "gz";
