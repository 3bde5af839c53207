use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use test_utils::constants::SAMPLE_TEXT;
use test_utils::{write_temp_file, write_temp_file_with_suffix};
use word_tally::{
    count_words_from_file, count_words_from_file_with_custom_config, AggregationError, Error,
    WordAggregator, WordCounterConfig, DEFAULT_WORD_COUNTER_CONFIG,
};

fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

fn config(case_sensitive: bool, ignore_common_words: bool) -> WordCounterConfig {
    WordCounterConfig {
        case_sensitive,
        ignore_common_words,
        ..*DEFAULT_WORD_COUNTER_CONFIG
    }
}

#[cfg(test)]
mod aggregate_lines_tests {
    use super::*;

    #[test]
    fn test_folds_case_and_punctuation_by_default() {
        let frequencies =
            WordAggregator::new(DEFAULT_WORD_COUNTER_CONFIG).aggregate_lines([SAMPLE_TEXT]);

        assert_eq!(frequencies.get("the"), Some(&3));
        assert_eq!(frequencies.get("cat"), Some(&2));
        for word in ["sat", "on", "mat", "was", "happy"] {
            assert_eq!(frequencies.get(word), Some(&1), "count for {}", word);
        }
        assert_eq!(frequencies.len(), 7);
    }

    #[test]
    fn test_ignore_common_drops_stop_words() {
        let frequencies = WordAggregator::new(&config(false, true)).aggregate_lines([SAMPLE_TEXT]);

        assert_eq!(frequencies.get("the"), None);
        assert_eq!(frequencies.get("on"), None);
        assert_eq!(frequencies.get("was"), None);
        assert_eq!(frequencies.get("cat"), Some(&2));
        assert_eq!(frequencies.len(), 4);
    }

    #[test]
    fn test_case_sensitive_keeps_tokens_verbatim() {
        let frequencies = WordAggregator::new(&config(true, false)).aggregate_lines([SAMPLE_TEXT]);

        assert_eq!(frequencies.get("The"), Some(&2));
        assert_eq!(frequencies.get("the"), Some(&1));
        assert_eq!(frequencies.get("mat."), Some(&1));
        assert_eq!(frequencies.get("happy."), Some(&1));
        assert_eq!(frequencies.get("mat"), None);
    }

    #[test]
    fn test_case_sensitive_stop_words_still_fold_case() {
        let frequencies =
            WordAggregator::new(&config(true, true)).aggregate_lines(["The THE the The, cat"]);

        // Only the token carrying punctuation escapes the stop-word list
        assert_eq!(frequencies.get("The,"), Some(&1));
        assert_eq!(frequencies.get("cat"), Some(&1));
        assert_eq!(frequencies.len(), 2);
    }

    #[test]
    fn test_tokens_span_any_whitespace() {
        let frequencies = WordAggregator::new(DEFAULT_WORD_COUNTER_CONFIG)
            .aggregate_lines(["  cat\tcat   ", "", "\u{00a0}cat\r"]);

        assert_eq!(frequencies.get("cat"), Some(&3));
        assert_eq!(frequencies.len(), 1);
    }

    #[test]
    fn test_never_counts_empty_words() {
        let frequencies =
            WordAggregator::new(DEFAULT_WORD_COUNTER_CONFIG).aggregate_lines(["-- ... !! ?", "ok"]);

        assert!(!frequencies.contains_key(""));
        assert_eq!(frequencies.len(), 1);
    }

    #[test]
    fn test_total_matches_surviving_tokens() {
        let aggregator = WordAggregator::new(&config(false, true));
        let lines = ["The cat sat on the mat.", "A dog -- and a cat!", "..."];

        let surviving = lines
            .iter()
            .flat_map(|line| line.split_whitespace())
            .filter_map(|token| aggregator.canonicalize(token))
            .count();
        let frequencies = aggregator.aggregate_lines(lines);

        assert_eq!(frequencies.values().sum::<usize>(), surviving);
        assert_eq!(surviving, 5);
    }
}

#[cfg(test)]
mod aggregate_file_tests {
    use super::*;

    #[test]
    fn test_reads_file() {
        let file = write_temp_file(b"The cat sat on the mat.\nThe cat was happy.\n");
        let frequencies = count_words_from_file(file.path()).unwrap();

        assert_eq!(frequencies.get("the"), Some(&3));
        assert_eq!(frequencies.values().sum::<usize>(), 10);
    }

    #[test]
    fn test_reads_crlf_file() {
        let file = write_temp_file(b"one two\r\ntwo\r\n");
        let frequencies = count_words_from_file(file.path()).unwrap();

        assert_eq!(frequencies.get("two"), Some(&2));
        assert_eq!(frequencies.len(), 2);
    }

    #[test]
    fn test_respects_custom_config() {
        let file = write_temp_file(SAMPLE_TEXT.as_bytes());
        let frequencies =
            count_words_from_file_with_custom_config(&config(false, true), file.path()).unwrap();

        assert_eq!(frequencies.get("the"), None);
        assert_eq!(frequencies.get("cat"), Some(&2));
    }

    #[test]
    fn test_reads_gzip_file() {
        let file = write_temp_file_with_suffix(&gzip(SAMPLE_TEXT), ".txt.gz");
        let frequencies = count_words_from_file(file.path()).unwrap();

        assert_eq!(frequencies.get("the"), Some(&3));
        assert_eq!(frequencies.get("cat"), Some(&2));
    }

    #[test]
    fn test_reads_every_gzip_member() {
        let mut concatenated = gzip("cat cat\n");
        concatenated.extend(gzip("cat dog\n"));

        let file = write_temp_file_with_suffix(&concatenated, ".gz");
        let frequencies = count_words_from_file(file.path()).unwrap();

        assert_eq!(frequencies.get("cat"), Some(&3));
        assert_eq!(frequencies.get("dog"), Some(&1));
        assert_eq!(frequencies.len(), 2);
    }

    #[test]
    fn test_corrupt_gzip_is_read_failure() {
        let file = write_temp_file_with_suffix(b"definitely not gzip", ".gz");
        let err = count_words_from_file(file.path()).unwrap_err();

        assert!(matches!(
            err,
            Error::Aggregation(AggregationError::ReadFailure { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.txt");

        let err = WordAggregator::new(DEFAULT_WORD_COUNTER_CONFIG)
            .aggregate_file(&path)
            .unwrap_err();

        match err {
            AggregationError::MissingFile { source_name } => {
                assert_eq!(source_name, path.display().to_string())
            }
            other => panic!("expected missing file, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_decode_failure() {
        let file = write_temp_file(b"valid line\n\xc3\x28 broken\nmore\n");
        let err = WordAggregator::new(DEFAULT_WORD_COUNTER_CONFIG)
            .aggregate_file(file.path())
            .unwrap_err();

        assert!(matches!(err, AggregationError::DecodeFailure { line: 2, .. }));
    }

    #[test]
    fn test_directory_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordAggregator::new(DEFAULT_WORD_COUNTER_CONFIG)
            .aggregate_file(dir.path())
            .unwrap_err();

        assert!(matches!(err, AggregationError::ReadFailure { .. }));
    }
}
