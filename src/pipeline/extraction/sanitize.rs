/// Sanitize extracted text before passing downstream.
/// Strips control characters, normalizes whitespace, preserves the
/// punctuation and unit symbols radiology reports rely on.
pub fn sanitize_extracted_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || matches!(
                    c,
                    '.' | ','
                        | ';'
                        | ':'
                        | '-'
                        | '/'
                        | '('
                        | ')'
                        | '['
                        | ']'
                        | '+'
                        | '='
                        | '%'
                        | '#'
                        | '@'
                        | '&'
                        | '\''
                        | '"'
                        | '!'
                        | '?'
                        | '<'
                        | '>'
                        | '*'
                        | '_'
                        | '°'
                        | '²'
                        | '³'
                        | 'µ'
                        // Measurement symbols: 4.5 × 3.2 cm, SUV ± 0.3
                        | '×'
                        | '±'
                )
        })
        .collect::<String>()
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_null_bytes() {
        let raw = "Impression: gallbladder\x00mass";
        let clean = sanitize_extracted_text(raw);
        assert!(!clean.contains('\x00'));
        assert!(clean.contains("gallbladder"));
    }

    #[test]
    fn strips_control_characters() {
        let raw = "SUVmax: 8.2\x01\x02\x03\nDate: 2026-03-15";
        let clean = sanitize_extracted_text(raw);
        assert!(!clean.contains('\x01'));
        assert!(!clean.contains('\x02'));
        assert!(clean.contains("8.2"));
        assert!(clean.contains("2026-03-15"));
    }

    #[test]
    fn preserves_tnm_notation() {
        let raw = "Pathological staging: pT2N1M0 (AJCC 8th)";
        let clean = sanitize_extracted_text(raw);
        assert_eq!(clean, "Pathological staging: pT2N1M0 (AJCC 8th)");
    }

    #[test]
    fn preserves_measurements_and_units() {
        let raw = "Mass measures 4.5 × 3.2 × 2.8 cm, SUVmax 8.2 ± 0.3, 37.5°C";
        let clean = sanitize_extracted_text(raw);
        assert!(clean.contains("4.5 × 3.2 × 2.8 cm"));
        assert!(clean.contains("± 0.3"));
        assert!(clean.contains("37.5°C"));
    }

    #[test]
    fn preserves_ranges_and_ratios() {
        let raw = "2 of 12 lymph nodes positive (3.5-5.0 mm/node)";
        let clean = sanitize_extracted_text(raw);
        assert_eq!(clean, "2 of 12 lymph nodes positive (3.5-5.0 mm/node)");
    }

    #[test]
    fn collapses_blank_lines() {
        let raw = "Findings\n\n\n\nImpression\n\n\nRecommendation";
        let clean = sanitize_extracted_text(raw);
        assert_eq!(clean, "Findings\nImpression\nRecommendation");
    }

    #[test]
    fn trims_whitespace_per_line() {
        let raw = "  leading spaces  \n  trailing too  ";
        let clean = sanitize_extracted_text(raw);
        assert_eq!(clean, "leading spaces\ntrailing too");
    }

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(sanitize_extracted_text(""), "");
    }

    #[test]
    fn only_control_chars_returns_empty() {
        assert_eq!(sanitize_extracted_text("\x00\x01\x02"), "");
    }
}
