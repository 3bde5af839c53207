pub mod constants;

use csv::Reader;
use std::collections::HashMap;
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Utility to load expected word counts from a `word,count` CSV file.
pub fn load_expected_counts<P: AsRef<Path>>(
    file_path: P,
) -> Result<HashMap<String, usize>, Box<dyn Error>> {
    let mut expected = HashMap::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        match (record.get(0), record.get(1)) {
            (Some(word), Some(count)) if record.len() == 2 => {
                expected.insert(word.to_string(), count.trim().parse()?);
            }
            _ => eprintln!("Skipping invalid row: {:?}", record),
        }
    }

    Ok(expected)
}

/// Path of the expected-counts CSV for a test file, e.g. `expected/mixed.csv` for `mixed.txt`.
pub fn expected_counts_path(test_file_path: &Path) -> PathBuf {
    let stem = test_file_path
        .file_stem()
        .expect("Test file has no name")
        .to_string_lossy();

    Path::new(constants::EXPECTED_COUNTS_DIRECTORY).join(format!("{}.csv", stem))
}

/// Writes `contents` to a fresh temporary file which lives as long as the returned handle.
pub fn write_temp_file(contents: &[u8]) -> NamedTempFile {
    write_temp_file_with_suffix(contents, ".txt")
}

pub fn write_temp_file_with_suffix(contents: &[u8], suffix: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    file.write_all(contents).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
