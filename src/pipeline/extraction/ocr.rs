use super::types::{OcrEngine, OcrPageResult};
use super::ExtractionError;

/// Bundled Tesseract OCR engine.
/// Only available when compiled with the `ocr` feature flag.
#[cfg(feature = "ocr")]
pub struct BundledTesseract {
    tessdata_dir: std::path::PathBuf,
    default_lang: String,
    /// Optional path to an oncology wordlist file for improved recognition.
    oncology_wordlist: Option<std::path::PathBuf>,
}

#[cfg(feature = "ocr")]
impl BundledTesseract {
    /// Initialize with a tessdata directory. English traineddata is required.
    pub fn new(tessdata_dir: &std::path::Path) -> Result<Self, ExtractionError> {
        if !tessdata_dir.join("eng.traineddata").exists() {
            return Err(ExtractionError::TessdataNotFound(tessdata_dir.to_path_buf()));
        }

        Ok(Self {
            tessdata_dir: tessdata_dir.to_path_buf(),
            default_lang: "eng".to_string(),
            oncology_wordlist: None,
        })
    }

    /// Locate a tessdata directory: TESSDATA_PREFIX first, then the usual
    /// distro install locations.
    pub fn discover() -> Result<Self, ExtractionError> {
        let mut candidates: Vec<std::path::PathBuf> = Vec::new();
        if let Ok(prefix) = std::env::var("TESSDATA_PREFIX") {
            candidates.push(std::path::PathBuf::from(prefix));
        }
        candidates.extend(
            [
                "/usr/share/tesseract-ocr/5/tessdata",
                "/usr/share/tesseract-ocr/4.00/tessdata",
                "/usr/share/tessdata",
                "/usr/local/share/tessdata",
            ]
            .iter()
            .map(std::path::PathBuf::from),
        );

        for dir in &candidates {
            if dir.join("eng.traineddata").exists() {
                return Self::new(dir);
            }
        }

        Err(ExtractionError::OcrInit(
            "no tessdata directory found; set TESSDATA_PREFIX".into(),
        ))
    }

    /// Set language(s) for OCR (e.g., "eng", "eng+deu")
    pub fn with_languages(mut self, langs: &str) -> Self {
        self.default_lang = langs.to_string();
        self
    }

    /// Set an oncology wordlist file for improved OCR accuracy.
    /// The file contains one term per line (comments starting with # are ignored).
    pub fn with_oncology_wordlist(mut self, path: &std::path::Path) -> Self {
        if path.exists() {
            self.oncology_wordlist = Some(path.to_path_buf());
        } else {
            tracing::warn!(
                path = %path.display(),
                "Oncology wordlist file not found, skipping"
            );
        }
        self
    }
}

#[cfg(feature = "ocr")]
impl OcrEngine for BundledTesseract {
    fn ocr_image(&self, image_bytes: &[u8]) -> Result<OcrPageResult, ExtractionError> {
        self.ocr_image_with_lang(image_bytes, &self.default_lang)
    }

    fn ocr_image_with_lang(
        &self,
        image_bytes: &[u8],
        lang: &str,
    ) -> Result<OcrPageResult, ExtractionError> {
        let tessdata_str = self
            .tessdata_dir
            .to_str()
            .ok_or_else(|| ExtractionError::OcrInit("Invalid tessdata path".into()))?;

        let tess = tesseract::Tesseract::new(Some(tessdata_str), Some(lang))
            .map_err(|e| ExtractionError::OcrInit(format!("{e:?}")))?;

        let tess = if let Some(ref wordlist_path) = self.oncology_wordlist {
            if let Some(path_str) = wordlist_path.to_str() {
                tess.set_variable("user_words_file", path_str).map_err(|e| {
                    ExtractionError::OcrConfig(format!("Failed to set wordlist: {e:?}"))
                })?
            } else {
                tess
            }
        } else {
            tess
        };

        let mut tess = tess
            .set_image_from_mem(image_bytes)
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))?;

        let text = tess
            .get_text()
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))?;

        let confidence = tess.mean_text_conf().max(0) as f32 / 100.0;

        // Per-word confidence via TSV output; fall back to splitting the
        // text with the page-mean confidence if TSV is unavailable.
        let word_confidences = match tess.get_tsv_text(0) {
            Ok(tsv) => parse_tsv_word_confidences(&tsv),
            Err(_) => text
                .split_whitespace()
                .map(|w| (w.to_string(), confidence))
                .collect(),
        };

        Ok(OcrPageResult {
            text,
            confidence,
            word_confidences,
        })
    }
}

/// OCR engine placeholder used when the crate is built without the `ocr`
/// feature or no tessdata is installed. Always errors; scanned input is
/// then surfaced to the caller as an OCR initialization failure instead
/// of silently producing an empty report.
pub struct UnavailableOcr;

impl OcrEngine for UnavailableOcr {
    fn ocr_image(&self, _image_bytes: &[u8]) -> Result<OcrPageResult, ExtractionError> {
        Err(ExtractionError::OcrInit(
            "OCR engine unavailable (build with the `ocr` feature and install tesseract)".into(),
        ))
    }

    fn ocr_image_with_lang(
        &self,
        image_bytes: &[u8],
        _lang: &str,
    ) -> Result<OcrPageResult, ExtractionError> {
        self.ocr_image(image_bytes)
    }
}

/// Mock OCR engine for unit testing without Tesseract.
pub struct MockOcrEngine {
    pub text: String,
    pub confidence: f32,
}

impl MockOcrEngine {
    pub fn new(text: &str, confidence: f32) -> Self {
        Self {
            text: text.to_string(),
            confidence,
        }
    }
}

impl OcrEngine for MockOcrEngine {
    fn ocr_image(&self, _image_bytes: &[u8]) -> Result<OcrPageResult, ExtractionError> {
        self.ocr_image_with_lang(_image_bytes, "eng")
    }

    fn ocr_image_with_lang(
        &self,
        _image_bytes: &[u8],
        _lang: &str,
    ) -> Result<OcrPageResult, ExtractionError> {
        let word_confidences = self
            .text
            .split_whitespace()
            .map(|w| (w.to_string(), self.confidence))
            .collect();

        Ok(OcrPageResult {
            text: self.text.clone(),
            confidence: self.confidence,
            word_confidences,
        })
    }
}

/// Parse Tesseract TSV output into per-word confidences.
/// TSV columns: level page_num block_num par_num line_num word_num left top width height conf text
/// Level 5 = individual word entries. Confidence is 0-100, scaled to 0.0-1.0.
pub(crate) fn parse_tsv_word_confidences(tsv: &str) -> Vec<(String, f32)> {
    let mut results = Vec::new();

    for line in tsv.lines().skip(1) {
        // Skip header row
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 12 {
            continue;
        }

        // Level 5 = word
        let level: i32 = match fields[0].parse() {
            Ok(l) => l,
            Err(_) => continue,
        };
        if level != 5 {
            continue;
        }

        let conf: i32 = match fields[10].parse() {
            Ok(c) => c,
            Err(_) => continue,
        };

        let word = fields[11].trim();
        if word.is_empty() {
            continue;
        }

        // Tesseract returns -1 for words it can't assign confidence to
        let confidence = if conf < 0 { 0.0 } else { conf as f32 / 100.0 };

        results.push((word.to_string(), confidence));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ocr_returns_configured_text() {
        let engine = MockOcrEngine::new("Adenocarcinoma 3.5 cm", 0.92);
        let result = engine.ocr_image(b"fake_image_bytes").unwrap();
        assert_eq!(result.text, "Adenocarcinoma 3.5 cm");
        assert!((result.confidence - 0.92).abs() < f32::EPSILON);
    }

    #[test]
    fn mock_ocr_word_confidences() {
        let engine = MockOcrEngine::new("distant metastasis present", 0.85);
        let result = engine.ocr_image(b"fake").unwrap();
        assert_eq!(result.word_confidences.len(), 3);
        assert_eq!(result.word_confidences[0].0, "distant");
        assert!((result.word_confidences[0].1 - 0.85).abs() < f32::EPSILON);
    }

    #[test]
    fn unavailable_ocr_always_errors() {
        let result = UnavailableOcr.ocr_image(b"scan");
        assert!(matches!(result, Err(ExtractionError::OcrInit(_))));
    }

    #[cfg(feature = "ocr")]
    #[test]
    fn bundled_tesseract_rejects_missing_tessdata() {
        let dir = tempfile::tempdir().unwrap();
        let result = BundledTesseract::new(dir.path());
        assert!(matches!(result, Err(ExtractionError::TessdataNotFound(_))));
    }

    #[cfg(feature = "ocr")]
    #[test]
    fn bundled_tesseract_missing_wordlist_stays_none() {
        let tessdata_dir = std::path::Path::new("/usr/share/tesseract-ocr/5/tessdata");
        if !tessdata_dir.exists() {
            return; // Skip on systems without Tesseract
        }
        let engine = BundledTesseract::new(tessdata_dir)
            .unwrap()
            .with_oncology_wordlist(std::path::Path::new("/nonexistent/wordlist.txt"));
        assert!(engine.oncology_wordlist.is_none());
    }

    #[test]
    fn oncology_wordlist_file_exists_and_valid() {
        let wordlist = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("resources")
            .join("oncology_wordlist.txt");
        assert!(wordlist.exists(), "oncology_wordlist.txt should exist in resources");

        let content = std::fs::read_to_string(&wordlist).unwrap();
        let terms: Vec<&str> = content
            .lines()
            .filter(|l| !l.starts_with('#') && !l.trim().is_empty())
            .collect();
        assert!(terms.len() >= 50, "Expected >= 50 terms, got {}", terms.len());
        assert!(terms.contains(&"carcinoma"), "Should contain carcinoma");
        assert!(terms.contains(&"metastasis"), "Should contain metastasis");
        assert!(terms.contains(&"lymphadenopathy"), "Should contain lymphadenopathy");
    }

    // --- TSV parsing ---

    #[test]
    fn tsv_parser_extracts_word_confidences() {
        let tsv = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\
                   1\t1\t0\t0\t0\t0\t0\t0\t600\t800\t-1\t\n\
                   5\t1\t1\t1\t1\t1\t10\t20\t80\t30\t95\tadenocarcinoma\n\
                   5\t1\t1\t1\t1\t2\t100\t20\t60\t30\t88\t3.5cm\n\
                   5\t1\t1\t1\t2\t1\t10\t60\t120\t30\t72\tnodes";
        let result = parse_tsv_word_confidences(tsv);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].0, "adenocarcinoma");
        assert!((result[0].1 - 0.95).abs() < f32::EPSILON);
        assert_eq!(result[1].0, "3.5cm");
        assert!((result[2].1 - 0.72).abs() < f32::EPSILON);
    }

    #[test]
    fn tsv_parser_skips_non_word_levels() {
        // Level 1 = page, 2 = block, 3 = paragraph, 4 = line, all skipped
        let tsv = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\
                   1\t1\t0\t0\t0\t0\t0\t0\t600\t800\t-1\t\n\
                   2\t1\t1\t0\t0\t0\t10\t10\t580\t780\t-1\t\n\
                   4\t1\t1\t1\t1\t0\t10\t20\t200\t30\t-1\t\n\
                   5\t1\t1\t1\t1\t1\t10\t20\t80\t30\t90\tlesion";
        let result = parse_tsv_word_confidences(tsv);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, "lesion");
    }

    #[test]
    fn tsv_parser_handles_negative_confidence() {
        let tsv = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\
                   5\t1\t1\t1\t1\t1\t10\t20\t80\t30\t-1\tgarbled";
        let result = parse_tsv_word_confidences(tsv);
        assert_eq!(result.len(), 1);
        assert!((result[0].1 - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tsv_parser_skips_malformed_lines() {
        let tsv = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\
                   too\tfew\tfields\n\
                   5\t1\t1\t1\t1\t1\t10\t20\t80\t30\t92\tOK\n\
                   notanumber\t1\t1\t1\t1\t1\t10\t20\t80\t30\t50\tbad";
        let result = parse_tsv_word_confidences(tsv);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, "OK");
    }

    #[test]
    fn tsv_parser_handles_empty_input() {
        assert!(parse_tsv_word_confidences("").is_empty());
    }
}
