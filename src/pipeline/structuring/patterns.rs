//! Compiled regex tables for feature extraction.
//!
//! Pattern order matters: within a feature, the first matching pattern
//! wins, and within the cancer table, the first matching type wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CancerType, TumorDepth};

fn rx(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex must compile")
}

/// A compiled pattern tagged with the cancer type it identifies.
pub struct CancerPattern {
    pub cancer_type: CancerType,
    pub regex: Regex,
}

/// Cancer type identification patterns, checked in declaration order.
pub static CANCER_TYPE_PATTERNS: LazyLock<Vec<CancerPattern>> = LazyLock::new(|| {
    let table: &[(CancerType, &[&str])] = &[
        (
            CancerType::Gallbladder,
            &[
                r"(?i)gallbladder\s+(?:cancer|carcinoma|tumou?r|neoplasm)",
                r"(?i)cholangiocarcinoma",
                r"(?i)\bgb\s+(?:cancer|carcinoma)",
            ],
        ),
        (
            CancerType::Esophageal,
            &[
                r"(?i)esophag(?:us|eal)\s+(?:cancer|carcinoma|tumou?r)",
                r"(?i)esophageal\s+adenocarcinoma",
                r"(?i)squamous\s+cell\s+carcinoma.*esophag",
            ],
        ),
        (
            CancerType::Breast,
            &[
                r"(?i)breast\s+(?:cancer|carcinoma|tumou?r)",
                r"(?i)mammary\s+(?:cancer|carcinoma)",
                r"(?i)ductal\s+carcinoma.*breast",
                r"(?i)lobular\s+carcinoma.*breast",
            ],
        ),
        (
            CancerType::Lung,
            &[
                r"(?i)lung\s+(?:cancer|carcinoma|tumou?r)",
                r"(?i)pulmonary\s+(?:cancer|carcinoma)",
                r"(?i)non-small\s+cell\s+lung\s+cancer",
                r"(?i)\bnsclc\b",
                r"(?i)small\s+cell\s+lung\s+cancer",
                r"(?i)\bsclc\b",
            ],
        ),
        (
            CancerType::Colorectal,
            &[
                r"(?i)colon\s+(?:cancer|carcinoma|tumou?r)",
                r"(?i)rectal\s+(?:cancer|carcinoma|tumou?r)",
                r"(?i)colorectal\s+(?:cancer|carcinoma)",
                r"(?i)adenocarcinoma.*(?:colon|rectum)",
            ],
        ),
        (
            CancerType::HeadAndNeck,
            &[
                r"(?i)head\s+and\s+neck\s+(?:cancer|carcinoma)",
                r"(?i)oral\s+cavity\s+(?:cancer|carcinoma)",
                r"(?i)oropharyn(?:x|geal)\s+(?:cancer|carcinoma)",
                r"(?i)laryn(?:x|geal)\s+(?:cancer|carcinoma)",
            ],
        ),
    ];

    table
        .iter()
        .flat_map(|(cancer_type, patterns)| {
            patterns.iter().map(|p| CancerPattern {
                cancer_type: *cancer_type,
                regex: rx(p),
            })
        })
        .collect()
});

/// Tumor size patterns; capture group 1 is the size in centimeters
/// (first dimension for "A x B x C cm" measurements).
pub static SIZE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        rx(r"(?i)(?:tumou?r|mass|lesion)\s+(?:size|measuring|measures)\s+(?:approximately\s+)?(\d+(?:\.\d+)?)\s*(?:[x×]\s*\d+(?:\.\d+)?\s*)?cm"),
        rx(r"(?i)(\d+(?:\.\d+)?)\s*cm\s+(?:tumou?r|mass|lesion)"),
        rx(r"(?i)(?:diameter|size)[^\n]*?(\d+(?:\.\d+)?)\s*cm"),
        rx(r"(?i)measures\s+(\d+(?:\.\d+)?)\s*[x×]\s*\d+(?:\.\d+)?\s*[x×]\s*\d+(?:\.\d+)?\s*cm"),
        rx(r"(?i)(\d+(?:\.\d+)?)\s*[x×]\s*\d+(?:\.\d+)?\s*[x×]\s*\d+(?:\.\d+)?\s*cm"),
    ]
});

/// Lymph node count patterns; capture group 1 is the involved count.
/// The "X of Y nodes" form is checked first so the involved count wins
/// over the sampled total.
pub static LYMPH_NODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        rx(r"(?i)(\d+)\s+of\s+\d+\s+lymph\s+nodes\s+positive"),
        rx(r"(?i)(\d+)\s+(?:lymph\s+)?nodes?\s+(?:involved|positive|enlarged)"),
        rx(r"(?i)(?:lymph\s+)?node\s+involvement[^\n]*?(\d+)"),
        rx(r"(?i)\bn(\d)\s+disease"),
        rx(r"(?i)(\d+)\s+lymph\s+nodes\s+(?:are\s+)?involved"),
    ]
});

/// Spelled-out node counts ("three lymph nodes involved").
pub static WORD_NODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"(?i)\b(two|three|four|five|six|seven|eight|nine|ten)\s+lymph\s+nodes?\s+(?:involved|positive)")
});

pub fn word_to_count(word: &str) -> Option<u32> {
    match word.to_lowercase().as_str() {
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        "seven" => Some(7),
        "eight" => Some(8),
        "nine" => Some(9),
        "ten" => Some(10),
        _ => None,
    }
}

pub static METASTASIS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        rx(r"(?i)distant\s+metastas(?:is|es)"),
        rx(r"(?i)metastatic\s+disease"),
        rx(r"(?i)\bm1\s+disease"),
        rx(r"(?i)spread\s+to\s+(?:liver|lung|bone|brain)"),
    ]
});

pub static LIVER_INVASION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        rx(r"(?i)liver\s+invasion"),
        rx(r"(?i)hepatic\s+invasion"),
        rx(r"(?i)invad(?:es|ing)\s+(?:the\s+)?liver"),
    ]
});

/// Tissue-depth keywords in most-specific-first order, so
/// "muscularis propria" wins over "muscularis" and "submucosa" over
/// "mucosa".
pub const DEPTH_KEYWORDS: &[(&str, TumorDepth)] = &[
    ("adjacent structures", TumorDepth::AdjacentStructures),
    ("muscularis propria", TumorDepth::MuscularisPropria),
    ("adventitia", TumorDepth::Adventitia),
    ("submucosa", TumorDepth::Submucosa),
    ("subserosa", TumorDepth::Subserosa),
    ("muscularis", TumorDepth::Muscularis),
    ("serosa", TumorDepth::Serosa),
    ("mucosa", TumorDepth::Mucosa),
];

/// Terms that indicate genuine staging context; each one found nudges
/// the extraction confidence up.
pub const SUPPORTING_TERMS: &[&str] = &[
    "staging",
    "tnm",
    "grade",
    "histology",
    "pathology",
    "biopsy",
    "imaging",
    "ct",
    "pet",
    "mri",
];
