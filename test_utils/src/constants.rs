pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const EXPECTED_COUNTS_DIRECTORY: &str = "tests/test_data_files/expected";

pub const SAMPLE_TEXT: &str = "The cat sat on the mat. The cat was happy.";
