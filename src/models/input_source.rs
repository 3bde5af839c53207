use crate::constants::{GZIP_EXTENSION, STDIN_DISPLAY_NAME, STDIN_PATH};
use crate::models::AggregationError;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where the text to be counted comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, selected with the path `-`.
    Stdin,

    /// A plain UTF-8 text file.
    File(PathBuf),

    /// A gzip-compressed UTF-8 text file, decompressed while reading. Every member of a
    /// multi-member file is read.
    GzipFile(PathBuf),
}

impl InputSource {
    /// Picks the source for a command-line path argument.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if path.as_os_str() == STDIN_PATH {
            return InputSource::Stdin;
        }

        let is_gzip = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(GZIP_EXTENSION));

        if is_gzip {
            InputSource::GzipFile(path.to_path_buf())
        } else {
            InputSource::File(path.to_path_buf())
        }
    }

    /// The name used for this source in messages.
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_DISPLAY_NAME.to_string(),
            InputSource::File(path) | InputSource::GzipFile(path) => path.display().to_string(),
        }
    }

    /// Opens the source for buffered reading.
    ///
    /// The returned reader owns the underlying handle, which is closed when it is dropped.
    pub fn open(&self) -> Result<Box<dyn BufRead>, AggregationError> {
        let reader: Box<dyn BufRead> = match self {
            InputSource::Stdin => Box::new(io::stdin().lock()),
            InputSource::File(path) => Box::new(BufReader::new(self.open_file(path)?)),
            InputSource::GzipFile(path) => {
                Box::new(BufReader::new(MultiGzDecoder::new(self.open_file(path)?)))
            }
        };

        Ok(reader)
    }

    /// Opens the source and returns its lines.
    pub fn lines(&self) -> Result<SourceLines<Box<dyn BufRead>>, AggregationError> {
        Ok(SourceLines::new(self.open()?, self.display_name()))
    }

    fn open_file(&self, path: &Path) -> Result<File, AggregationError> {
        File::open(path).map_err(|err| AggregationError::from_io(&self.display_name(), err))
    }
}

/// A single forward pass over the lines of a reader.
///
/// Lines are decoded strictly as UTF-8, and line terminators (`\n` or `\r\n`) are removed.
/// The first error ends the iteration.
pub struct SourceLines<R: BufRead> {
    reader: R,
    source_name: String,
    line_number: usize,
    buffer: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> SourceLines<R> {
    pub fn new(reader: R, source_name: String) -> Self {
        Self {
            reader,
            source_name,
            line_number: 0,
            buffer: Vec::new(),
            finished: false,
        }
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn fail(&mut self, err: AggregationError) -> Option<Result<String, AggregationError>> {
        self.finished = true;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = Result<String, AggregationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.buffer.clear();

        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                self.line_number += 1;

                if self.buffer.ends_with(b"\n") {
                    self.buffer.pop();
                    if self.buffer.ends_with(b"\r") {
                        self.buffer.pop();
                    }
                }

                match String::from_utf8(std::mem::take(&mut self.buffer)) {
                    Ok(line) => Some(Ok(line)),
                    Err(_) => {
                        let err = AggregationError::DecodeFailure {
                            source_name: self.source_name.clone(),
                            line: self.line_number,
                        };
                        self.fail(err)
                    }
                }
            }
            Err(err) => {
                let err = AggregationError::from_io(&self.source_name, err);
                self.fail(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_path_detects_stdin() {
        assert_eq!(InputSource::from_path("-"), InputSource::Stdin);
    }

    #[test]
    fn test_from_path_detects_gzip() {
        assert_eq!(
            InputSource::from_path("corpus.txt.GZ"),
            InputSource::GzipFile(PathBuf::from("corpus.txt.GZ"))
        );
        assert_eq!(
            InputSource::from_path("corpus.txt"),
            InputSource::File(PathBuf::from("corpus.txt"))
        );
    }

    #[test]
    fn test_source_lines_strips_terminators() {
        let reader = Cursor::new("one\r\ntwo\nthree".as_bytes());
        let lines: Vec<String> = SourceLines::new(reader, "mem".to_string())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_source_lines_reports_decode_line() {
        let reader = Cursor::new(b"fine\nalso fine\nbad \xff byte\nnever read\n".to_vec());
        let mut lines = SourceLines::new(reader, "mem".to_string());

        assert!(lines.next().unwrap().is_ok());
        assert!(lines.next().unwrap().is_ok());
        match lines.next() {
            Some(Err(AggregationError::DecodeFailure { line, .. })) => assert_eq!(line, 3),
            other => panic!("expected decode failure, got {:?}", other),
        }
        assert!(lines.next().is_none());
    }
}
