use serde::{Deserialize, Serialize};

use super::enums::{CancerType, TumorDepth};

/// Medical features pulled from report text by the regex extractor.
/// Everything downstream (staging tables, report summary) is a pure
/// function of this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalFeatures {
    pub cancer_type: Option<CancerType>,
    /// Largest tumor dimension in centimeters. 0.0 when not found.
    pub tumor_size_cm: f32,
    pub lymph_nodes_involved: u32,
    pub distant_metastasis: bool,
    pub liver_invasion: bool,
    pub tumor_depth: TumorDepth,
    /// Extraction confidence in [0, 1], scored from how many features
    /// were found and how much supporting terminology the text carries.
    pub confidence_score: f32,
    /// Raw text snippets the patterns matched on, for report display.
    pub extracted_terms: Vec<String>,
}

impl Default for MedicalFeatures {
    fn default() -> Self {
        Self {
            cancer_type: None,
            tumor_size_cm: 0.0,
            lymph_nodes_involved: 0,
            distant_metastasis: false,
            liver_invasion: false,
            tumor_depth: TumorDepth::Unknown,
            confidence_score: 0.0,
            extracted_terms: Vec::new(),
        }
    }
}
