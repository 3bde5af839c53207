/// Options which control how words are counted and which of them are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCounterConfig {
    /// Count tokens verbatim instead of folding case and stripping punctuation.
    pub case_sensitive: bool,

    /// Exclude common function words (see `STOP_WORD_LIST`) from the counts.
    pub ignore_common_words: bool,

    /// Only report words which occurred at least this many times.
    pub min_count: i64,

    /// Only report this many of the highest ranked words, if set.
    pub top_n: Option<i64>,
}

/// Column widths used when rendering the report table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    /// Minimum width of the left-justified word column.
    pub word_column_width: usize,

    /// Minimum width of the left-justified count column.
    pub count_column_width: usize,

    /// Width of the horizontal rules framing the table.
    pub rule_width: usize,
}
