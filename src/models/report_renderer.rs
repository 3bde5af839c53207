use crate::config::DEFAULT_REPORT_LAYOUT;
use crate::models::ReportLayout;
use crate::types::RankedEntry;
use std::fmt;
use std::fmt::Write;

/// Why a report has no rows. Chosen by the caller, which knows how the entries were filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReportReason {
    /// The input contained no countable words at all.
    NoWords,

    /// Words were found, but none occurred at least this many times.
    BelowMinCount(i64),

    /// The top limit was zero or negative.
    TopLimit(i64),
}

impl fmt::Display for EmptyReportReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReportReason::NoWords => write!(f, "No words found."),
            EmptyReportReason::BelowMinCount(min_count) => {
                write!(f, "No words found with at least {} occurrence(s).", min_count)
            }
            EmptyReportReason::TopLimit(top_n) => {
                write!(f, "No words to show with a top limit of {}.", top_n)
            }
        }
    }
}

/// Renders ranked entries and summary totals as a fixed-width text table.
pub struct ReportRenderer {
    layout: ReportLayout,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(*DEFAULT_REPORT_LAYOUT)
    }
}

impl ReportRenderer {
    pub fn new(layout: ReportLayout) -> Self {
        Self { layout }
    }

    /// Renders a report.
    ///
    /// # Arguments
    /// * `entries` - Rows to show, in display order. They are not re-sorted.
    /// * `total_unique_words` - Unique words in the whole frequency map, not just `entries`.
    /// * `total_occurrences` - Occurrences across the whole frequency map.
    /// * `empty_reason` - The line rendered instead of a table when `entries` is empty.
    ///
    /// # Returns
    /// * The report text. Every line, including the last, ends with `\n`.
    pub fn render(
        &self,
        entries: &[RankedEntry],
        total_unique_words: usize,
        total_occurrences: usize,
        empty_reason: EmptyReportReason,
    ) -> String {
        if entries.is_empty() {
            return format!("{}\n", empty_reason);
        }

        let mut out = String::new();
        let rule = "-".repeat(self.layout.rule_width);

        // Writing to a `String` cannot fail
        let _ = writeln!(out);
        let _ = writeln!(out, "Word Count Results (showing {} words):", entries.len());
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "{}", self.render_row("Word", "Count"));
        let _ = writeln!(out, "{}", rule);

        for (word, count) in entries {
            let _ = writeln!(out, "{}", self.render_row(word, &count.to_string()));
        }

        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "Total unique words: {}", total_unique_words);
        let _ = writeln!(out, "Total word occurrences: {}", total_occurrences);

        out
    }

    /// Left-justifies both cells. Overlong cells are never truncated.
    fn render_row(&self, word: &str, count: &str) -> String {
        format!(
            "{:<word_width$} {:<count_width$}",
            word,
            count,
            word_width = self.layout.word_column_width,
            count_width = self.layout.count_column_width,
        )
    }
}
