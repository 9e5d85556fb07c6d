//! Report processing orchestrator.
//!
//! Single entry point that drives the full pipeline:
//! validate → extract → extract features → stage → summarize.
//!
//! Uses trait-based DI for the text extractor so the orchestrator
//! remains fully testable with mock implementations.

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use crate::pipeline::extraction::docx::DocxTextExtractor;
use crate::pipeline::extraction::orchestrator::DocumentExtractor;
use crate::pipeline::extraction::pdf::PdfTextExtractor;
use crate::pipeline::extraction::types::TextExtractor;
use crate::pipeline::extraction::ExtractionError;
use crate::pipeline::import::format::sanitize_filename;
use crate::pipeline::import::hash::compute_content_hash;
use crate::pipeline::import::{detect_format, ImportError};
use crate::pipeline::structuring::{FeatureError, FeatureExtractor};
use crate::report::{ExtractionSummary, StagingReport};
use crate::staging::StagingEngine;

/// Errors that can occur during report processing.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Feature extraction failed: {0}")]
    Feature(#[from] FeatureError),
}

/// The five linear pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStage {
    Validate,
    Extract,
    ExtractFeatures,
    Stage,
    Summarize,
}

impl ProcessingStage {
    pub const ALL: [ProcessingStage; 5] = [
        ProcessingStage::Validate,
        ProcessingStage::Extract,
        ProcessingStage::ExtractFeatures,
        ProcessingStage::Stage,
        ProcessingStage::Summarize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Extract => "extract",
            Self::ExtractFeatures => "extract_features",
            Self::Stage => "stage",
            Self::Summarize => "summarize",
        }
    }
}

/// Orchestrates report processing end to end.
pub struct ReportProcessor {
    extractor: Box<dyn TextExtractor + Send + Sync>,
    features: FeatureExtractor,
    staging: StagingEngine,
}

impl Default for ReportProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportProcessor {
    /// Build a processor with the default extraction engines.
    /// OCR uses bundled Tesseract when compiled in and tessdata is
    /// installed; otherwise scanned input fails with a clear error.
    pub fn new() -> Self {
        let ocr = default_ocr_engine();
        Self::with_extractor(Box::new(DocumentExtractor::new(
            ocr,
            Box::new(PdfTextExtractor),
            Box::new(DocxTextExtractor),
        )))
    }

    /// Build a processor around a specific text extractor (tests inject
    /// mocks through this).
    pub fn with_extractor(extractor: Box<dyn TextExtractor + Send + Sync>) -> Self {
        Self {
            extractor,
            features: FeatureExtractor::default(),
            staging: StagingEngine::new(),
        }
    }

    /// Run the full pipeline on a report file.
    pub fn process(&self, path: &Path) -> Result<StagingReport, ProcessingError> {
        self.process_with_progress(path, |_| {})
    }

    /// Run the full pipeline, reporting each stage as it begins.
    pub fn process_with_progress(
        &self,
        path: &Path,
        progress: impl Fn(ProcessingStage),
    ) -> Result<StagingReport, ProcessingError> {
        let document_id = Uuid::new_v4();
        let source_filename = sanitize_filename(&path.display().to_string());

        tracing::info!(
            document_id = %document_id,
            file = %source_filename,
            "Processing report"
        );

        progress(ProcessingStage::Validate);
        let format = detect_format(path)?;
        if !format.category.is_supported() {
            return Err(ImportError::UnsupportedFormat.into());
        }
        let content_hash = compute_content_hash(path)?;

        progress(ProcessingStage::Extract);
        let extraction = self.extractor.extract(&document_id, path, &format)?;
        if extraction.full_text.trim().is_empty() {
            return Err(ExtractionError::EmptyDocument.into());
        }

        progress(ProcessingStage::ExtractFeatures);
        let features = self.features.extract(&extraction.full_text)?;

        progress(ProcessingStage::Stage);
        let tnm = self.staging.determine_stage(&features);

        progress(ProcessingStage::Summarize);
        let report = StagingReport {
            document_id,
            source_filename,
            content_hash,
            extraction: ExtractionSummary {
                method: extraction.method.as_str().to_string(),
                confidence: extraction.overall_confidence,
                page_count: extraction.page_count,
                text_length: extraction.full_text.len(),
            },
            features,
            tnm,
            analyzed_at: Utc::now(),
        };

        tracing::info!(
            document_id = %document_id,
            stage = report.tnm.stage_group.as_str(),
            "Report processing complete"
        );

        Ok(report)
    }
}

fn default_ocr_engine() -> Box<dyn crate::pipeline::extraction::types::OcrEngine + Send + Sync> {
    #[cfg(feature = "ocr")]
    {
        match crate::pipeline::extraction::ocr::BundledTesseract::discover() {
            Ok(engine) => return Box::new(engine),
            Err(e) => {
                tracing::warn!(error = %e, "Tesseract unavailable, scanned input will fail");
            }
        }
    }

    Box::new(crate::pipeline::extraction::ocr::UnavailableOcr)
}
