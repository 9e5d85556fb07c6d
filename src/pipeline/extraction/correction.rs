//! Post-OCR oncology term correction.
//!
//! Fuzzy-matches words against an embedded oncology dictionary to fix
//! common OCR errors in staging-relevant terminology. Only corrects when
//! confidence is high (edit distance <= 2 AND the word is at least 5
//! characters long to avoid false positives).

/// Oncology terms the staging pipeline keys on.
/// Sorted for binary search. Must be lowercase for case-insensitive matching.
const ONCOLOGY_TERMS: &[&str] = &[
    "adenocarcinoma",
    "adenopathy",
    "adjacent",
    "adventitia",
    "axillary",
    "biopsy",
    "breast",
    "bronchogenic",
    "carcinoma",
    "cervical",
    "cholangiocarcinoma",
    "colon",
    "colorectal",
    "ductal",
    "dysplasia",
    "enlarged",
    "esophageal",
    "esophagus",
    "gallbladder",
    "hepatic",
    "histology",
    "hypermetabolic",
    "imaging",
    "infiltrating",
    "invading",
    "invasion",
    "laryngeal",
    "larynx",
    "lesion",
    "lobular",
    "lymph",
    "lymphadenopathy",
    "lymphatic",
    "malignancy",
    "malignant",
    "mammary",
    "mediastinal",
    "metastases",
    "metastasis",
    "metastatic",
    "mucosa",
    "muscularis",
    "neoplasm",
    "nodal",
    "nodes",
    "nodule",
    "oncology",
    "oropharyngeal",
    "oropharynx",
    "pathology",
    "peritoneum",
    "positive",
    "propria",
    "pulmonary",
    "radiotherapy",
    "rectal",
    "rectum",
    "resection",
    "serosa",
    "spread",
    "squamous",
    "staging",
    "submucosa",
    "subserosa",
    "supraclavicular",
    "tumor",
];

/// Apply post-OCR oncology term correction to extracted text.
/// Returns corrected text. Only corrects words that are close matches
/// to known terms (edit distance <= 2, word length >= 5).
pub fn correct_oncology_terms(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_buf = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            word_buf.push(ch);
        } else {
            if !word_buf.is_empty() {
                result.push_str(&try_correct_word(&word_buf));
                word_buf.clear();
            }
            result.push(ch);
        }
    }

    if !word_buf.is_empty() {
        result.push_str(&try_correct_word(&word_buf));
    }

    result
}

/// Try to correct a single word against the oncology dictionary.
/// Only corrects if: word.len() >= 5 AND edit_distance <= 2 AND unique best match.
fn try_correct_word(word: &str) -> String {
    if word.len() < 5 {
        return word.to_string();
    }

    let lower = word.to_lowercase();

    // Exact match — no correction needed
    if ONCOLOGY_TERMS.binary_search(&lower.as_str()).is_ok() {
        return word.to_string();
    }

    // Words with digits are measurements, never dictionary terms
    if word.chars().any(|c| c.is_ascii_digit()) {
        return word.to_string();
    }

    let mut best_term: Option<&str> = None;
    let mut best_distance = 3u32; // Only accept distance <= 2
    let mut ambiguous = false;

    for &term in ONCOLOGY_TERMS {
        // Quick length filter: terms differing by more than 2 chars can't match
        let len_diff = (word.len() as i32 - term.len() as i32).unsigned_abs();
        if len_diff > 2 {
            continue;
        }

        let dist = edit_distance(&lower, term);
        if dist < best_distance {
            best_distance = dist;
            best_term = Some(term);
            ambiguous = false;
        } else if dist == best_distance && best_term.is_some() {
            ambiguous = true; // Multiple equally close matches
        }
    }

    if let Some(term) = best_term {
        if !ambiguous {
            return preserve_case(word, term);
        }
    }

    word.to_string()
}

/// Preserve the original word's capitalization pattern when applying correction.
fn preserve_case(original: &str, correction: &str) -> String {
    if original.chars().all(|c| c.is_uppercase() || !c.is_alphabetic()) {
        return correction.to_uppercase();
    }

    let first_upper = original.chars().next().is_some_and(|c| c.is_uppercase());
    if first_upper {
        let mut chars = correction.chars();
        match chars.next() {
            Some(c) => {
                let mut s = c.to_uppercase().to_string();
                s.extend(chars);
                s
            }
            None => correction.to_string(),
        }
    } else {
        correction.to_string()
    }
}

/// Levenshtein edit distance, two-row rolling implementation.
fn edit_distance(a: &str, b: &str) -> u32 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n as u32;
    }
    if n == 0 {
        return m as u32;
    }

    let mut prev: Vec<u32> = (0..=n as u32).collect();
    let mut curr = vec![0u32; n + 1];

    for (i, &a_ch) in a_chars.iter().enumerate() {
        curr[0] = (i + 1) as u32;
        for (j, &b_ch) in b_chars.iter().enumerate() {
            let cost = if a_ch == b_ch { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
