mod config;
pub use config::{DEFAULT_REPORT_LAYOUT, DEFAULT_WORD_COUNTER_CONFIG};
mod constants;
pub use constants::{STOP_WORDS, STOP_WORD_LIST};
pub mod models;
pub use models::{
    normalize, AggregationError, Cli, CliCommand, EmptyReportReason, Error, InputSource,
    ReportLayout, ReportRenderer, SourceLines, WordAggregator, WordCounterConfig, WordNormalizer,
};
pub mod types;
mod utils;
pub use types::{CanonicalWord, RankedEntry, Token, TokenRef, WordFrequency, WordFrequencyMap};
pub use utils::{rank_word_frequencies, summarize_word_frequencies, tokenize};
use log::info;
use std::path::Path;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Counts every word in the file at `path` using the default configuration.
pub fn count_words_from_file<P: AsRef<Path>>(path: P) -> Result<WordFrequencyMap, Error> {
    count_words_from_file_with_custom_config(DEFAULT_WORD_COUNTER_CONFIG, path)
}

pub fn count_words_from_file_with_custom_config<P: AsRef<Path>>(
    config: &WordCounterConfig,
    path: P,
) -> Result<WordFrequencyMap, Error> {
    let frequencies = WordAggregator::new(config).aggregate_file(path)?;

    Ok(frequencies)
}

/// Reads `input`, then counts, ranks and renders it as a text report.
///
/// On failure nothing is rendered; the caller gets exactly one error.
pub fn generate_report(input: &InputSource, config: &WordCounterConfig) -> Result<String, Error> {
    generate_report_with_custom_layout(input, config, DEFAULT_REPORT_LAYOUT)
}

pub fn generate_report_with_custom_layout(
    input: &InputSource,
    config: &WordCounterConfig,
    layout: &ReportLayout,
) -> Result<String, Error> {
    info!("Analyzing file: {}", input.display_name());
    info!("Case sensitive: {}", config.case_sensitive);
    info!("Ignore common words: {}", config.ignore_common_words);

    let frequencies = WordAggregator::new(config).aggregate_source(input)?;

    let ranked = rank_word_frequencies(&frequencies, config.min_count, config.top_n);
    let (total_unique_words, total_occurrences) = summarize_word_frequencies(&frequencies);

    let empty_reason = match config.top_n {
        _ if frequencies.is_empty() => EmptyReportReason::NoWords,
        Some(top_n) if top_n <= 0 => EmptyReportReason::TopLimit(top_n),
        _ => EmptyReportReason::BelowMinCount(config.min_count),
    };

    Ok(ReportRenderer::new(*layout).render(
        &ranked,
        total_unique_words,
        total_occurrences,
        empty_reason,
    ))
}
