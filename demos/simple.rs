use word_tally::{
    rank_word_frequencies, summarize_word_frequencies, EmptyReportReason, ReportRenderer,
    WordAggregator, WordCounterConfig, DEFAULT_WORD_COUNTER_CONFIG,
};

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let text = "The cat sat on the mat. The cat was happy.";
    let config = WordCounterConfig {
        ignore_common_words: true,
        ..*DEFAULT_WORD_COUNTER_CONFIG
    };

    let frequencies = WordAggregator::new(&config).aggregate_lines(text.lines());
    let ranked = rank_word_frequencies(&frequencies, config.min_count, Some(3));
    let (total_unique_words, total_occurrences) = summarize_word_frequencies(&frequencies);

    println!("Word counts for the given text \"{}\"", text);
    print!(
        "{}",
        ReportRenderer::default().render(
            &ranked,
            total_unique_words,
            total_occurrences,
            EmptyReportReason::NoWords,
        )
    );
}
