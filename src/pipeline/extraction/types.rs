use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ExtractionError;

/// Raw text blob produced for one clinical report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportText {
    pub document_id: Uuid,
    pub method: ExtractionMethod,
    pub full_text: String,
    pub char_count: usize,
}

/// How the report text was obtained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ExtractionMethod {
    /// Read directly from a plain-text report file.
    PlainTextRead,
    /// Handed to the pipeline pre-extracted by an external collaborator
    /// (PDF parser, OCR engine).
    Provided,
}

/// Text extraction abstraction (allows mocking for tests).
pub trait TextExtractor {
    fn extract(&self, document_id: &Uuid, path: &Path) -> Result<ReportText, ExtractionError>;
}
