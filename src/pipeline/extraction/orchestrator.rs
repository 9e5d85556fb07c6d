use std::path::Path;

use uuid::Uuid;

use super::confidence::{analyze_ocr_quality, compute_overall_confidence};
use super::correction::correct_oncology_terms;
use super::preprocess::preprocess_image;
use super::sanitize::sanitize_extracted_text;
use super::types::{
    DocxExtractor, ExtractionMethod, ExtractionResult, ExtractionWarning, OcrEngine,
    PageExtraction, PdfExtractor, TextExtractor,
};
use super::ExtractionError;
use crate::config;
use crate::pipeline::import::format::FileCategory;
use crate::pipeline::import::FormatDetection;

/// Concrete implementation of the text extractor.
/// Uses trait objects for OCR, PDF and DOCX extraction, enabling
/// dependency injection in tests.
pub struct DocumentExtractor {
    ocr_engine: Box<dyn OcrEngine + Send + Sync>,
    pdf_extractor: Box<dyn PdfExtractor + Send + Sync>,
    docx_extractor: Box<dyn DocxExtractor + Send + Sync>,
}

impl DocumentExtractor {
    pub fn new(
        ocr_engine: Box<dyn OcrEngine + Send + Sync>,
        pdf_extractor: Box<dyn PdfExtractor + Send + Sync>,
        docx_extractor: Box<dyn DocxExtractor + Send + Sync>,
    ) -> Self {
        Self {
            ocr_engine,
            pdf_extractor,
            docx_extractor,
        }
    }
}

impl TextExtractor for DocumentExtractor {
    fn extract(
        &self,
        document_id: &Uuid,
        path: &Path,
        format: &FormatDetection,
    ) -> Result<ExtractionResult, ExtractionError> {
        tracing::info!(
            document_id = %document_id,
            category = format.category.as_str(),
            "Starting text extraction"
        );

        let bytes = std::fs::read(path)?;

        let (method, mut pages) = match &format.category {
            FileCategory::DigitalPdf => {
                let pages = self.pdf_extractor.extract_text(&bytes)?;
                (ExtractionMethod::PdfDirect, pages)
            }
            FileCategory::ScannedPdf => {
                let pages = ocr_scanned_pdf(&bytes, &*self.pdf_extractor, &*self.ocr_engine)?;
                (ExtractionMethod::TesseractOcr, pages)
            }
            FileCategory::Docx => {
                let pages = self.docx_extractor.extract_text(&bytes)?;
                (ExtractionMethod::DocxDirect, pages)
            }
            FileCategory::Image => {
                let processed = preprocess_image(&bytes)?;
                let ocr_result = self.ocr_engine.ocr_image(&processed)?;
                let warnings = analyze_ocr_quality(&ocr_result);

                let page = PageExtraction {
                    page_number: 1,
                    text: ocr_result.text,
                    confidence: ocr_result.confidence,
                    warnings,
                };
                (ExtractionMethod::TesseractOcr, vec![page])
            }
            FileCategory::PlainText => {
                let text = String::from_utf8(bytes)
                    .map_err(|e| ExtractionError::EncodingError(e.to_string()))?;

                let page = PageExtraction {
                    page_number: 1,
                    text,
                    confidence: 0.99,
                    warnings: vec![],
                };
                (ExtractionMethod::PlainTextRead, vec![page])
            }
            FileCategory::Unsupported => {
                return Err(ExtractionError::UnsupportedFormat);
            }
        };

        // Sanitize all extracted text
        for page in &mut pages {
            page.text = sanitize_extracted_text(&page.text);
        }

        // OCR output gets the oncology dictionary pass; digital text is
        // trusted as-is
        if method == ExtractionMethod::TesseractOcr {
            for page in &mut pages {
                page.text = correct_oncology_terms(&page.text);
            }
        }

        let overall_confidence = compute_overall_confidence(&pages, &method);

        let mut full_text = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n--- Page Break ---\n\n");

        if full_text.len() > config::MAX_TEXT_LEN {
            let original_len = full_text.len();
            tracing::warn!(
                document_id = %document_id,
                original_len,
                "Extracted text exceeds limit, truncating"
            );
            full_text.truncate(floor_char_boundary(&full_text, config::MAX_TEXT_LEN));
            if let Some(last) = pages.last_mut() {
                last.warnings.push(ExtractionWarning::Truncated { original_len });
            }
        }

        let page_count = pages.len();

        tracing::info!(
            document_id = %document_id,
            method = method.as_str(),
            pages = page_count,
            confidence = overall_confidence,
            text_length = full_text.len(),
            "Text extraction complete"
        );

        Ok(ExtractionResult {
            document_id: *document_id,
            method,
            pages,
            full_text,
            overall_confidence,
            page_count,
        })
    }
}

/// Largest index <= max that falls on a UTF-8 character boundary.
fn floor_char_boundary(s: &str, max: usize) -> usize {
    let mut idx = max.min(s.len());
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// OCR a scanned PDF page by page.
/// Direct extraction runs first; pages that yield no meaningful text
/// (scanned pages) are OCR'd from the raw PDF bytes.
fn ocr_scanned_pdf(
    pdf_bytes: &[u8],
    pdf_extractor: &dyn PdfExtractor,
    ocr_engine: &dyn OcrEngine,
) -> Result<Vec<PageExtraction>, ExtractionError> {
    let direct_pages = pdf_extractor.extract_text(pdf_bytes)?;

    let mut pages = Vec::with_capacity(direct_pages.len());

    for direct_page in &direct_pages {
        // If direct extraction found meaningful text, use it
        if direct_page.text.trim().len() > 20 {
            pages.push(direct_page.clone());
            continue;
        }

        let ocr_result = ocr_engine.ocr_image(pdf_bytes)?;
        let warnings = analyze_ocr_quality(&ocr_result);

        pages.push(PageExtraction {
            page_number: direct_page.page_number,
            text: ocr_result.text,
            confidence: ocr_result.confidence,
            warnings,
        });
    }

    // If no pages were produced at all, return a single empty page
    if pages.is_empty() {
        pages.push(PageExtraction {
            page_number: 1,
            text: String::new(),
            confidence: 0.0,
            warnings: vec![ExtractionWarning::PartialExtraction {
                reason: "No text could be extracted from scanned PDF".into(),
            }],
        });
    }

    Ok(pages)
}
