use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ExtractionError;
use crate::pipeline::import::FormatDetection;

/// Result of text extraction from a single document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub document_id: Uuid,
    pub method: ExtractionMethod,
    pub pages: Vec<PageExtraction>,
    pub full_text: String,
    pub overall_confidence: f32,
    pub page_count: usize,
}

/// How text was extracted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExtractionMethod {
    PdfDirect,
    DocxDirect,
    TesseractOcr,
    PlainTextRead,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PdfDirect => "pdf_direct",
            Self::DocxDirect => "docx_direct",
            Self::TesseractOcr => "tesseract_ocr",
            Self::PlainTextRead => "plain_text_read",
        }
    }
}

/// Per-page extraction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageExtraction {
    pub page_number: usize,
    pub text: String,
    pub confidence: f32,
    pub warnings: Vec<ExtractionWarning>,
}

/// Warnings about extraction quality
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ExtractionWarning {
    BlurryImage,
    HandwritingDetected,
    PartialExtraction { reason: String },
    Truncated { original_len: usize },
}

/// Raw OCR result from the engine
#[derive(Debug)]
pub struct OcrPageResult {
    pub text: String,
    pub confidence: f32,
    pub word_confidences: Vec<(String, f32)>,
}

/// OCR engine abstraction (allows mocking for tests)
pub trait OcrEngine {
    fn ocr_image(&self, image_bytes: &[u8]) -> Result<OcrPageResult, ExtractionError>;

    fn ocr_image_with_lang(
        &self,
        image_bytes: &[u8],
        lang: &str,
    ) -> Result<OcrPageResult, ExtractionError>;
}

/// PDF text extraction abstraction
pub trait PdfExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError>;

    fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize, ExtractionError>;
}

/// DOCX text extraction abstraction
pub trait DocxExtractor {
    fn extract_text(&self, docx_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError>;
}

/// Main extraction orchestrator trait
pub trait TextExtractor {
    fn extract(
        &self,
        document_id: &Uuid,
        path: &Path,
        format: &FormatDetection,
    ) -> Result<ExtractionResult, ExtractionError>;
}
