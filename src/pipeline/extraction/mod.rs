pub mod reader;
pub mod sanitize;
pub mod types;

pub use reader::PlainTextReader;
pub use sanitize::sanitize_report_text;
pub use types::{ExtractionMethod, ReportText, TextExtractor};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported format for extraction: {0}")]
    UnsupportedFormat(String),

    #[error("Document contains no extractable text: {0}")]
    EmptyDocument(PathBuf),
}
