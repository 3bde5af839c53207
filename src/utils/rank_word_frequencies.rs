use crate::types::{RankedEntry, WordFrequencyMap};
use log::warn;

/// Filters and ranks a mapping of canonical words to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two words have the same frequency, sorts by word in ascending
///   lexicographical order for deterministic ordering.
///
/// ### Parameters:
/// - `frequencies`: The `WordFrequencyMap` to rank. It is not modified.
/// - `min_count`: Words occurring fewer times than this are dropped. Values below 1 keep
///   every word.
/// - `top_n`: If set, only the first `top_n` ranked entries are kept. Zero or a negative
///   value yields no entries.
///
/// ### Returns:
/// - A `Vec` of `(CanonicalWord, WordFrequency)` tuples, sorted as described above. It is
///   empty when no word passes the filters.
///
/// ### Example:
/// ```rust
/// use word_tally::rank_word_frequencies;
/// use word_tally::types::WordFrequencyMap;
///
/// let mut frequencies = WordFrequencyMap::new();
/// frequencies.insert("sat".to_string(), 1);
/// frequencies.insert("the".to_string(), 3);
/// frequencies.insert("cat".to_string(), 2);
/// frequencies.insert("mat".to_string(), 1);
///
/// let ranked = rank_word_frequencies(&frequencies, 1, Some(3));
/// assert_eq!(ranked, vec![
///     ("the".to_string(), 3),
///     ("cat".to_string(), 2),
///     ("mat".to_string(), 1),
/// ]);
/// ```
pub fn rank_word_frequencies(
    frequencies: &WordFrequencyMap,
    min_count: i64,
    top_n: Option<i64>,
) -> Vec<RankedEntry> {
    // A negative minimum can never exclude anything
    let min_frequency = usize::try_from(min_count).unwrap_or(0);

    let mut ranked: Vec<RankedEntry> = frequencies
        .iter()
        .filter(|(_, frequency)| **frequency >= min_frequency)
        .map(|(word, frequency)| (word.to_owned(), *frequency))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by word (ascending)
    });

    if let Some(top_n) = top_n {
        if top_n <= 0 {
            warn!("Top limit of {} leaves no entries to show", top_n);
        }

        ranked.truncate(usize::try_from(top_n).unwrap_or(0));
    }

    ranked
}
