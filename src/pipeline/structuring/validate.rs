use super::FeatureError;
use crate::config::ClinicalLimits;
use crate::models::MedicalFeatures;

/// Validate extracted features against clinical plausibility ranges.
/// Extraction clamps at the caps, so violations here mean a parsing bug
/// upstream rather than an unusual report.
pub fn validate_features(
    features: &MedicalFeatures,
    limits: &ClinicalLimits,
) -> Result<(), FeatureError> {
    if features.tumor_size_cm.is_nan() || features.tumor_size_cm < 0.0 {
        return Err(FeatureError::Validation(format!(
            "tumor size must be a non-negative number, got {}",
            features.tumor_size_cm
        )));
    }

    if features.tumor_size_cm > limits.max_tumor_size_cm {
        return Err(FeatureError::Validation(format!(
            "tumor size ({} cm) exceeds maximum allowed ({} cm)",
            features.tumor_size_cm, limits.max_tumor_size_cm
        )));
    }

    if features.lymph_nodes_involved > limits.max_lymph_nodes {
        return Err(FeatureError::Validation(format!(
            "lymph node count ({}) exceeds maximum allowed ({})",
            features.lymph_nodes_involved, limits.max_lymph_nodes
        )));
    }

    if !(0.0..=1.0).contains(&features.confidence_score) {
        return Err(FeatureError::Validation(format!(
            "confidence score must be within [0, 1], got {}",
            features.confidence_score
        )));
    }

    Ok(())
}
