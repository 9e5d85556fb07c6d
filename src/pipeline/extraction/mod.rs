pub mod types;
pub mod confidence;
pub mod sanitize;
pub mod correction;
pub mod preprocess;
pub mod pdf;
pub mod docx;
pub mod ocr;
pub mod orchestrator;

pub use types::*;
pub use confidence::*;
pub use sanitize::*;
pub use pdf::*;
pub use docx::*;
pub use ocr::*;
pub use orchestrator::*;

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::import::ImportError;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tesseract OCR initialization failed: {0}")]
    OcrInit(String),

    #[error("Tesseract OCR configuration error: {0}")]
    OcrConfig(String),

    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("DOCX parsing failed: {0}")]
    DocxParsing(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Text encoding error: {0}")]
    EncodingError(String),

    #[error("Tessdata not found at: {0}")]
    TessdataNotFound(PathBuf),

    #[error("No text could be extracted from the document")]
    EmptyDocument,

    #[error("Unsupported format for extraction")]
    UnsupportedFormat,

    #[error("Import error: {0}")]
    Import(#[from] ImportError),
}
