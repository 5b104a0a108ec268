use std::path::Path;

use uuid::Uuid;

use super::sanitize::sanitize_report_text;
use super::types::{ExtractionMethod, ReportText, TextExtractor};
use super::ExtractionError;

/// Reads plain-text report files from disk.
///
/// PDF parsing and OCR live outside this crate; documents in those
/// formats arrive pre-extracted through `ExtractionMethod::Provided`.
pub struct PlainTextReader {
    allowed_extensions: Vec<String>,
}

impl PlainTextReader {
    pub fn new(allowed_file_types: &[String]) -> Self {
        Self {
            allowed_extensions: allowed_file_types
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    fn is_allowed(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed == extension)
    }
}

impl TextExtractor for PlainTextReader {
    fn extract(&self, document_id: &Uuid, path: &Path) -> Result<ReportText, ExtractionError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        let Some(extension) = extension else {
            // No extension to check; name the file itself in the error.
            let name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("<unnamed>");
            return Err(ExtractionError::UnsupportedFormat(name.to_string()));
        };
        if !self.is_allowed(&extension) {
            return Err(ExtractionError::UnsupportedFormat(format!(".{extension}")));
        }

        let raw = std::fs::read_to_string(path)?;
        let full_text = sanitize_report_text(&raw);
        if full_text.is_empty() {
            return Err(ExtractionError::EmptyDocument(path.to_path_buf()));
        }

        tracing::debug!(
            document_id = %document_id,
            chars = full_text.chars().count(),
            "Read plain-text report"
        );

        Ok(ReportText {
            document_id: *document_id,
            method: ExtractionMethod::PlainTextRead,
            char_count: full_text.chars().count(),
            full_text,
        })
    }
}
