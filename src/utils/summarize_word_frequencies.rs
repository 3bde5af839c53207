use crate::types::WordFrequencyMap;

/// Totals for an entire frequency map, independent of any filtering applied for display.
///
/// # Returns
/// * `(total_unique_words, total_occurrences)`
pub fn summarize_word_frequencies(frequencies: &WordFrequencyMap) -> (usize, usize) {
    (frequencies.len(), frequencies.values().sum())
}
