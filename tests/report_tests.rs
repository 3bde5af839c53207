use word_tally::{EmptyReportReason, ReportLayout, ReportRenderer};

fn entries(rows: &[(&str, usize)]) -> Vec<(String, usize)> {
    rows.iter()
        .map(|(word, count)| (word.to_string(), *count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_table() {
        let report = ReportRenderer::default().render(
            &entries(&[("the", 3), ("cat", 2)]),
            7,
            10,
            EmptyReportReason::NoWords,
        );

        let expected = [
            "",
            "Word Count Results (showing 2 words):",
            "--------------------------------------------------",
            "Word                 Count     ",
            "--------------------------------------------------",
            "the                  3         ",
            "cat                  2         ",
            "--------------------------------------------------",
            "Total unique words: 7",
            "Total word occurrences: 10",
            "",
        ]
        .join("\n");

        assert_eq!(report, expected);
    }

    #[test]
    fn test_keeps_given_order() {
        let report = ReportRenderer::default().render(
            &entries(&[("zebra", 1), ("apple", 5)]),
            2,
            6,
            EmptyReportReason::NoWords,
        );

        let zebra = report.find("zebra").unwrap();
        let apple = report.find("apple").unwrap();
        assert!(zebra < apple);
    }

    #[test]
    fn test_does_not_truncate_long_words() {
        let long_word = "pneumonoultramicroscopicsilicovolcanoconiosis";
        let report = ReportRenderer::default().render(
            &entries(&[(long_word, 1)]),
            1,
            1,
            EmptyReportReason::NoWords,
        );

        assert!(report.contains(&format!("{} 1         \n", long_word)));
    }

    #[test]
    fn test_pads_by_characters() {
        let report = ReportRenderer::default().render(
            &entries(&[("café", 3)]),
            1,
            3,
            EmptyReportReason::NoWords,
        );

        assert!(report.contains("café                 3         \n"));
    }

    #[test]
    fn test_custom_layout() {
        let renderer = ReportRenderer::new(ReportLayout {
            word_column_width: 6,
            count_column_width: 3,
            rule_width: 10,
        });
        let report = renderer.render(&entries(&[("cat", 2)]), 1, 2, EmptyReportReason::NoWords);

        assert!(report.contains("\n----------\n"));
        assert!(report.contains("\nWord   Count\n"));
        assert!(report.contains("\ncat    2  \n"));
    }

    #[test]
    fn test_empty_entries_render_single_line() {
        let renderer = ReportRenderer::default();

        assert_eq!(
            renderer.render(&[], 0, 0, EmptyReportReason::NoWords),
            "No words found.\n"
        );
        assert_eq!(
            renderer.render(&[], 7, 10, EmptyReportReason::BelowMinCount(5)),
            "No words found with at least 5 occurrence(s).\n"
        );
        assert_eq!(
            renderer.render(&[], 7, 10, EmptyReportReason::TopLimit(0)),
            "No words to show with a top limit of 0.\n"
        );
    }
}
