use crate::models::{ReportLayout, WordCounterConfig};

pub const DEFAULT_WORD_COUNTER_CONFIG: &WordCounterConfig = &WordCounterConfig {
    case_sensitive: false,
    ignore_common_words: false,
    min_count: 1,
    top_n: None,
};

pub const DEFAULT_REPORT_LAYOUT: &ReportLayout = &ReportLayout {
    word_column_width: 20,
    count_column_width: 10,
    rule_width: 50,
};
