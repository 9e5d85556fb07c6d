use super::patterns;
use super::validate::validate_features;
use super::FeatureError;
use crate::config::ClinicalLimits;
use crate::models::{CancerType, MedicalFeatures, TumorDepth};

/// Extracts staging-relevant features from report text with validation.
/// All matching is regex/keyword based and deterministic.
pub struct FeatureExtractor {
    limits: ClinicalLimits,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(ClinicalLimits::default())
    }
}

impl FeatureExtractor {
    pub fn new(limits: ClinicalLimits) -> Self {
        Self { limits }
    }

    /// Extract medical features from report text.
    pub fn extract(&self, text: &str) -> Result<MedicalFeatures, FeatureError> {
        if text.trim().is_empty() {
            return Err(FeatureError::EmptyText);
        }

        let mut features = MedicalFeatures::default();
        let mut terms = Vec::new();

        if let Some((cancer_type, matched)) = extract_cancer_type(text) {
            features.cancer_type = Some(cancer_type);
            terms.push(matched);
        }

        if let Some((size, matched)) = extract_tumor_size(text) {
            features.tumor_size_cm = size.min(self.limits.max_tumor_size_cm);
            terms.push(matched);
        }

        if let Some((nodes, matched)) = extract_lymph_nodes(text) {
            features.lymph_nodes_involved = nodes.min(self.limits.max_lymph_nodes);
            terms.push(matched);
        }

        if let Some(matched) = first_match(&patterns::METASTASIS_PATTERNS, text) {
            features.distant_metastasis = true;
            terms.push(matched);
        }

        if let Some(matched) = first_match(&patterns::LIVER_INVASION_PATTERNS, text) {
            features.liver_invasion = true;
            terms.push(matched);
        }

        features.tumor_depth = extract_tumor_depth(text);
        features.extracted_terms = terms;
        features.confidence_score = score_confidence(&features, text);

        validate_features(&features, &self.limits)?;

        tracing::info!(
            cancer_type = ?features.cancer_type,
            tumor_size_cm = features.tumor_size_cm,
            lymph_nodes = features.lymph_nodes_involved,
            metastasis = features.distant_metastasis,
            confidence = features.confidence_score,
            "Feature extraction complete"
        );

        Ok(features)
    }
}

/// First cancer type whose pattern table matches; table order decides ties.
fn extract_cancer_type(text: &str) -> Option<(CancerType, String)> {
    patterns::CANCER_TYPE_PATTERNS.iter().find_map(|p| {
        p.regex
            .find(text)
            .map(|m| (p.cancer_type, m.as_str().to_string()))
    })
}

fn extract_tumor_size(text: &str) -> Option<(f32, String)> {
    for pattern in patterns::SIZE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Ok(size) = caps[1].parse::<f32>() {
                let matched = caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default();
                return Some((size, matched));
            }
        }
    }
    None
}

fn extract_lymph_nodes(text: &str) -> Option<(u32, String)> {
    for pattern in patterns::LYMPH_NODE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Ok(nodes) = caps[1].parse::<u32>() {
                let matched = caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default();
                return Some((nodes, matched));
            }
        }
    }

    // Spelled-out counts ("three lymph nodes involved")
    let caps = patterns::WORD_NODE_PATTERN.captures(text)?;
    let count = patterns::word_to_count(&caps[1])?;
    let matched = caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default();
    Some((count, matched))
}

fn first_match(table: &[regex::Regex], text: &str) -> Option<String> {
    table
        .iter()
        .find_map(|p| p.find(text).map(|m| m.as_str().to_string()))
}

/// Deepest tissue layer mentioned; keyword table is ordered
/// most-specific-first so "submucosa" is not shadowed by "mucosa".
fn extract_tumor_depth(text: &str) -> TumorDepth {
    let lower = text.to_lowercase();
    for (keyword, depth) in patterns::DEPTH_KEYWORDS {
        if lower.contains(keyword) {
            return *depth;
        }
    }
    TumorDepth::Unknown
}

/// Confidence score: weight each found feature, plus a small bonus per
/// supporting medical term in the text, capped at 1.0.
fn score_confidence(features: &MedicalFeatures, text: &str) -> f32 {
    let mut confidence: f32 = 0.0;

    if features.cancer_type.is_some() {
        confidence += 0.3;
    }
    if features.tumor_size_cm > 0.0 {
        confidence += 0.2;
    }
    if features.lymph_nodes_involved > 0 {
        confidence += 0.2;
    }
    if features.distant_metastasis || features.liver_invasion {
        confidence += 0.1;
    }

    let lower = text.to_lowercase();
    let term_count = patterns::SUPPORTING_TERMS
        .iter()
        .filter(|t| lower.contains(*t))
        .count();
    confidence += (term_count as f32 * 0.05).min(0.2);

    confidence.min(1.0)
}
