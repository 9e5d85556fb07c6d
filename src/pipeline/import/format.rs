use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ImportError;
use crate::config;

/// Broad file categories we handle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FileCategory {
    DigitalPdf,
    ScannedPdf,
    Docx,
    Image,
    PlainText,
    Unsupported,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DigitalPdf => "digital_pdf",
            Self::ScannedPdf => "scanned_pdf",
            Self::Docx => "docx",
            Self::Image => "image",
            Self::PlainText => "plain_text",
            Self::Unsupported => "unsupported",
        }
    }

    pub fn needs_ocr(&self) -> bool {
        matches!(self, Self::ScannedPdf | Self::Image)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

/// Result of format detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatDetection {
    pub mime_type: String,
    pub category: FileCategory,
    pub is_digital_pdf: Option<bool>,
    pub file_size_bytes: u64,
}

/// Detect file format from magic bytes (NOT file extensions).
/// Magic bytes don't lie — extensions can be wrong.
pub fn detect_format(path: &Path) -> Result<FormatDetection, ImportError> {
    let metadata = std::fs::metadata(path)?;
    let file_size = metadata.len();

    if file_size == 0 || file_size > config::max_file_size_bytes() {
        return Ok(FormatDetection {
            mime_type: "unknown".into(),
            category: FileCategory::Unsupported,
            is_digital_pdf: None,
            file_size_bytes: file_size,
        });
    }

    // Read first 16 bytes for magic number detection
    let mut file = std::fs::File::open(path)?;
    let mut header = [0u8; 16];
    let bytes_read = file.read(&mut header)?;

    let (mime_type, category, is_digital_pdf) = match &header[..bytes_read.min(8)] {
        // PDF: starts with %PDF
        [0x25, 0x50, 0x44, 0x46, ..] => {
            let is_digital = check_pdf_has_text(path).unwrap_or(false);
            let category = if is_digital {
                FileCategory::DigitalPdf
            } else {
                FileCategory::ScannedPdf
            };
            ("application/pdf".to_string(), category, Some(is_digital))
        }
        // ZIP local header: DOCX is a zip with a word/ package inside.
        // Any other zip is unsupported.
        [0x50, 0x4B, 0x03, 0x04, ..] => {
            if zip_contains_word_package(path)? {
                (
                    "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                        .to_string(),
                    FileCategory::Docx,
                    None,
                )
            } else {
                ("application/zip".to_string(), FileCategory::Unsupported, None)
            }
        }
        // JPEG: starts with FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => ("image/jpeg".to_string(), FileCategory::Image, None),
        // PNG: starts with 89 50 4E 47
        [0x89, 0x50, 0x4E, 0x47, ..] => ("image/png".to_string(), FileCategory::Image, None),
        // TIFF: little-endian (49 49 2A 00) or big-endian (4D 4D 00 2A)
        [0x49, 0x49, 0x2A, 0x00, ..] | [0x4D, 0x4D, 0x00, 0x2A, ..] => {
            ("image/tiff".to_string(), FileCategory::Image, None)
        }
        _ => {
            // Try as plain text (UTF-8 validation on first chunk)
            if is_likely_text(path)? {
                ("text/plain".to_string(), FileCategory::PlainText, None)
            } else {
                (
                    "application/octet-stream".to_string(),
                    FileCategory::Unsupported,
                    None,
                )
            }
        }
    };

    Ok(FormatDetection {
        mime_type,
        category,
        is_digital_pdf,
        file_size_bytes: file_size,
    })
}

/// Check if a PDF has extractable text (digital vs scanned).
/// Uses a heuristic: search for text stream markers in raw PDF bytes.
fn check_pdf_has_text(path: &Path) -> Result<bool, ImportError> {
    let file = std::fs::File::open(path)?;
    let mut buffer = Vec::new();
    // Read up to 256KB to check for text markers
    let mut limited = file.take(256 * 1024);
    limited.read_to_end(&mut buffer)?;

    let content = String::from_utf8_lossy(&buffer);

    // Count text-related PDF operators:
    // BT/ET = begin/end text, Tj/TJ = show text, Tf = set font
    let text_markers = ["BT", "ET", " Tj", " TJ", " Tf"];
    let marker_count: usize = text_markers.iter().map(|m| content.matches(m).count()).sum();

    // Heuristic: >= 3 text markers suggests a digital PDF with text layer
    Ok(marker_count >= 3)
}

/// Check whether a zip file is a Word package.
/// Looks for the "word/document.xml" entry name in the first 4KB (local
/// headers) and the last 64KB (central directory) instead of unpacking.
fn zip_contains_word_package(path: &Path) -> Result<bool, ImportError> {
    const NEEDLE: &[u8] = b"word/document.xml";

    let mut file = std::fs::File::open(path)?;
    let len = file.metadata()?.len();

    let mut head = vec![0u8; 4096.min(len as usize)];
    file.read_exact(&mut head)?;
    if contains_bytes(&head, NEEDLE) {
        return Ok(true);
    }

    let tail_len = (64 * 1024).min(len) as usize;
    let mut tail = vec![0u8; tail_len];
    file.seek(SeekFrom::End(-(tail_len as i64)))?;
    file.read_exact(&mut tail)?;
    Ok(contains_bytes(&tail, NEEDLE))
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Check if a file is likely plain text (valid UTF-8, mostly printable)
fn is_likely_text(path: &Path) -> Result<bool, ImportError> {
    let mut file = std::fs::File::open(path)?;
    let mut buffer = vec![0u8; 4096];
    let n = file.read(&mut buffer)?;
    buffer.truncate(n);

    if n == 0 {
        return Ok(false);
    }

    let text = match std::str::from_utf8(&buffer) {
        Ok(t) => t,
        Err(_) => return Ok(false),
    };

    // At least 80% printable characters (or whitespace)
    let printable = text
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .count();
    let ratio = printable as f64 / text.len().max(1) as f64;
    Ok(ratio > 0.80)
}

/// Sanitize a filename — strip path components, limit length
pub fn sanitize_filename(original: &str) -> String {
    let name = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("report");

    let clean: String = name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | '\0'))
        .take(255)
        .collect();

    if clean.is_empty() {
        "report".to_string()
    } else {
        clean
    }
}
