use std::io;
use thiserror::Error;

/// The ways reading and counting an input source can fail.
///
/// Every variant is terminal. When aggregation fails, no partial frequency map is returned.
#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("File '{source_name}' not found.")]
    MissingFile { source_name: String },

    #[error("Permission denied to read file '{source_name}'.")]
    PermissionDenied { source_name: String },

    #[error("Unable to decode line {line} of file '{source_name}' as UTF-8. Try a different encoding.")]
    DecodeFailure { source_name: String, line: usize },

    #[error("Error reading file '{source_name}': {source}")]
    ReadFailure {
        source_name: String,
        #[source]
        source: io::Error,
    },
}

impl AggregationError {
    /// Classifies an I/O error raised while opening or reading `source_name`.
    pub fn from_io(source_name: &str, err: io::Error) -> Self {
        let source_name = source_name.to_string();

        match err.kind() {
            io::ErrorKind::NotFound => AggregationError::MissingFile { source_name },
            io::ErrorKind::PermissionDenied => AggregationError::PermissionDenied { source_name },
            _ => AggregationError::ReadFailure {
                source_name,
                source: err,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error("Invalid {parameter} parameter. {reason}")]
    InvalidParameter { parameter: String, reason: String },
}
