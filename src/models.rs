pub mod cli;
pub use cli::{Cli, CliCommand};

pub mod config;
pub use config::{ReportLayout, WordCounterConfig};

pub mod error;
pub use error::{AggregationError, Error};

pub mod input_source;
pub use input_source::{InputSource, SourceLines};

pub mod report_renderer;
pub use report_renderer::{EmptyReportReason, ReportRenderer};

pub mod word_aggregator;
pub use word_aggregator::WordAggregator;

pub mod word_normalizer;
pub use word_normalizer::{normalize, WordNormalizer};
