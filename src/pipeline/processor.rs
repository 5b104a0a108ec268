//! Report processing orchestrator.
//!
//! Single entry point that drives the full analysis pipeline:
//! extract text → extract entities → evaluate rules → audit.
//!
//! Uses trait-based DI for the text extractor and audit sink so the
//! orchestrator remains fully testable with mock implementations.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use uuid::Uuid;

use crate::audit::{AuditSink, TracingAuditSink};
use crate::config::AppSettings;
use crate::pipeline::entities::{extract_entities, EntitySet};
use crate::pipeline::extraction::{ExtractionError, PlainTextReader, TextExtractor};
use crate::recommend::{recommend_tests, Recommendation};
use crate::rules::{ConfigurationError, RuleStore};

// ---------------------------------------------------------------------------
// Error and result types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Rule configuration invalid: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Full analysis result returned to the boundary layer.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub document_id: Uuid,
    pub entities: EntitySet,
    pub recommendations: Vec<Recommendation>,
    pub processing_time_ms: u64,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Orchestrates report analysis end to end.
///
/// Holds the loaded rule table for its lifetime; concurrent analyses may
/// share one processor since nothing here is mutated after construction.
pub struct ReportProcessor {
    extractor: Box<dyn TextExtractor + Send + Sync>,
    rules: RuleStore,
    audit: Box<dyn AuditSink + Send + Sync>,
}

impl ReportProcessor {
    pub fn new(
        extractor: Box<dyn TextExtractor + Send + Sync>,
        rules: RuleStore,
        audit: Box<dyn AuditSink + Send + Sync>,
    ) -> Self {
        Self {
            extractor,
            rules,
            audit,
        }
    }

    /// Build a processor from settings: plain-text reader, rule table
    /// from the configured source (or defaults), tracing audit sink.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, ConfigurationError> {
        let rules = RuleStore::load(settings.rules_file.as_deref())?;
        for (test, _) in rules.iter() {
            if !settings.knows_test(test) {
                tracing::warn!(test, "Rule references a test outside the known catalog");
            }
        }
        Ok(Self::new(
            Box::new(PlainTextReader::new(&settings.allowed_file_types)),
            rules,
            Box::new(TracingAuditSink),
        ))
    }

    /// Analyze a report file on disk.
    pub fn process_file(&self, path: &Path) -> Result<AnalysisOutcome, ProcessingError> {
        let document_id = Uuid::new_v4();
        let start = Instant::now();
        let report = self.extractor.extract(&document_id, path)?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("<unnamed>");
        Ok(self.analyze(document_id, filename, &report.full_text, start))
    }

    /// Analyze a pre-extracted text blob (PDF/OCR handled upstream).
    pub fn process_text(&self, text: &str) -> AnalysisOutcome {
        let document_id = Uuid::new_v4();
        self.analyze(document_id, "<provided>", text, Instant::now())
    }

    fn analyze(
        &self,
        document_id: Uuid,
        filename: &str,
        text: &str,
        start: Instant,
    ) -> AnalysisOutcome {
        let entities = extract_entities(text);
        let recommendations = recommend_tests(&entities, &self.rules);
        self.audit
            .record(&document_id, filename, &entities, &recommendations);

        let processing_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            document_id = %document_id,
            entities = entities.token_count(),
            recommendations = recommendations.len(),
            processing_ms = processing_time_ms,
            "Report analysis complete"
        );

        AnalysisOutcome {
            document_id,
            entities,
            recommendations,
            processing_time_ms,
        }
    }
}
