use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a raw token as an owned `String`. A token is a maximal run of non-whitespace
/// characters, exactly as it appears in the input before normalization.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// The normalized form of a token, used as the counting key. Never empty once it lands in a
/// `WordFrequencyMap`.
pub type CanonicalWord = String;

/// Represents the total number of occurrences of a canonical word within a text document.
pub type WordFrequency = usize;

/// Represents a map of canonical words to their frequency counts within a text document.
/// The key is the `CanonicalWord`, and the value is the `WordFrequency`.
pub type WordFrequencyMap = HashMap<CanonicalWord, WordFrequency>;

/// A single row of the final report: a canonical word and how often it occurred.
pub type RankedEntry = (CanonicalWord, WordFrequency);
