use crate::constants::STOP_WORDS;
use crate::models::{AggregationError, InputSource, WordCounterConfig, WordNormalizer};
use crate::types::{CanonicalWord, TokenRef, WordFrequencyMap};
use crate::utils::tokenize;
use log::debug;
use std::path::Path;

/// Builds a `WordFrequencyMap` from a sequence of lines in a single forward pass.
#[derive(Debug, Clone, Copy)]
pub struct WordAggregator {
    normalizer: WordNormalizer,
    ignore_common_words: bool,
}

impl WordAggregator {
    pub fn new(config: &WordCounterConfig) -> Self {
        Self {
            normalizer: WordNormalizer::new(config.case_sensitive),
            ignore_common_words: config.ignore_common_words,
        }
    }

    /// Counts the words in an already-decoded sequence of lines.
    ///
    /// # Arguments
    /// * `lines` - The lines to count. Consumed exactly once.
    ///
    /// # Returns
    /// * The complete frequency map. Every key is non-empty and every count is at least 1.
    pub fn aggregate_lines<I, S>(&self, lines: I) -> WordFrequencyMap
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frequencies = WordFrequencyMap::new();

        for line in lines {
            self.accumulate_line(line.as_ref(), &mut frequencies);
        }

        frequencies
    }

    /// Opens `source`, counts every word in it, and releases the handle.
    ///
    /// Either the full frequency map is returned or exactly one error; a failure part way
    /// through discards everything counted so far.
    pub fn aggregate_source(
        &self,
        source: &InputSource,
    ) -> Result<WordFrequencyMap, AggregationError> {
        let mut lines = source.lines()?;
        let mut frequencies = WordFrequencyMap::new();

        for line in lines.by_ref() {
            self.accumulate_line(&line?, &mut frequencies);
        }

        debug!(
            "Read {} line(s) from '{}': {} unique word(s), {} occurrence(s)",
            lines.line_number(),
            source.display_name(),
            frequencies.len(),
            frequencies.values().sum::<usize>()
        );

        Ok(frequencies)
    }

    /// Counts the words of the file at `path`. The path `-` reads standard input.
    pub fn aggregate_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<WordFrequencyMap, AggregationError> {
        self.aggregate_source(&InputSource::from_path(path))
    }

    /// Normalizes and filters a single token.
    ///
    /// # Returns
    /// * The word to count, or `None` if the token should be dropped.
    pub fn canonicalize(&self, token: &TokenRef) -> Option<CanonicalWord> {
        let word = self.normalizer.normalize(token)?;

        // Stop words are matched against the lowercased word even when counting is
        // case sensitive, so "The" is dropped but "The," is kept. Known quirk, kept as-is.
        if self.ignore_common_words && STOP_WORDS.contains(word.to_lowercase().as_str()) {
            return None;
        }

        Some(word)
    }

    fn accumulate_line(&self, line: &str, frequencies: &mut WordFrequencyMap) {
        for word in tokenize(line).filter_map(|token| self.canonicalize(token)) {
            *frequencies.entry(word).or_insert(0) += 1;
        }
    }
}
