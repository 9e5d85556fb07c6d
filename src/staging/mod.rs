//! Per-cancer TNM decision tables.
//!
//! Each table is a pure function of `MedicalFeatures`: fixed thresholds
//! and branch order, no heuristics. Branch order within a table is part
//! of its behavior and must not be rearranged.

pub mod breast;
pub mod colorectal;
pub mod esophageal;
pub mod gallbladder;
pub mod head_neck;
pub mod lung;

pub use breast::BreastStager;
pub use colorectal::ColorectalStager;
pub use esophageal::EsophagealStager;
pub use gallbladder::GallbladderStager;
pub use head_neck::HeadNeckStager;
pub use lung::LungStager;

use crate::guidelines;
use crate::models::{CancerType, MedicalFeatures, TnmClassification};

/// One cancer type's staging algorithm.
pub trait CancerStager {
    fn cancer_type(&self) -> CancerType;

    fn stage(&self, features: &MedicalFeatures) -> TnmClassification;
}

/// Dispatches staging to the per-cancer tables and attaches the matching
/// guideline reference. Unknown or unsupported cancer types yield a
/// "not available" classification rather than an error.
pub struct StagingEngine {
    stagers: Vec<Box<dyn CancerStager + Send + Sync>>,
}

impl Default for StagingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StagingEngine {
    pub fn new() -> Self {
        Self {
            stagers: vec![
                Box::new(GallbladderStager),
                Box::new(EsophagealStager),
                Box::new(BreastStager),
                Box::new(LungStager),
                Box::new(ColorectalStager),
                Box::new(HeadNeckStager),
            ],
        }
    }

    pub fn determine_stage(&self, features: &MedicalFeatures) -> TnmClassification {
        let Some(cancer_type) = features.cancer_type else {
            tracing::warn!("No cancer type identified, staging not available");
            return TnmClassification::not_available();
        };

        let Some(stager) = self
            .stagers
            .iter()
            .find(|s| s.cancer_type() == cancer_type)
        else {
            tracing::warn!(cancer_type = %cancer_type, "No stager registered");
            return TnmClassification::not_available();
        };

        let mut tnm = stager.stage(features);
        tnm.guideline = Some(guidelines::guideline_for(cancer_type));

        tracing::info!(
            cancer_type = %cancer_type,
            tnm = %tnm.tnm_notation(),
            stage = tnm.stage_group.as_str(),
            "Staging complete"
        );

        tnm
    }

    pub fn supported_types(&self) -> Vec<CancerType> {
        self.stagers.iter().map(|s| s.cancer_type()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StageGroup;

    #[test]
    fn engine_covers_all_cancer_types() {
        let engine = StagingEngine::new();
        let supported = engine.supported_types();
        for ct in CancerType::ALL {
            assert!(supported.contains(&ct), "missing stager for {ct}");
        }
    }

    #[test]
    fn missing_cancer_type_is_not_available() {
        let engine = StagingEngine::new();
        let tnm = engine.determine_stage(&MedicalFeatures::default());
        assert_eq!(tnm.stage_group, StageGroup::NotAvailable);
        assert!(tnm.guideline.is_none());
    }

    #[test]
    fn staged_result_carries_guideline() {
        let engine = StagingEngine::new();
        let features = MedicalFeatures {
            cancer_type: Some(CancerType::Lung),
            tumor_size_cm: 2.0,
            confidence_score: 0.8,
            ..MedicalFeatures::default()
        };
        let tnm = engine.determine_stage(&features);
        let guideline = tnm.guideline.expect("guideline should be attached");
        assert_eq!(guideline.code, "nscl");
        assert!(guideline.url.contains("nccn.org"));
    }

    #[test]
    fn confidence_propagates_from_features() {
        let engine = StagingEngine::new();
        let features = MedicalFeatures {
            cancer_type: Some(CancerType::Breast),
            tumor_size_cm: 1.5,
            confidence_score: 0.65,
            ..MedicalFeatures::default()
        };
        let tnm = engine.determine_stage(&features);
        assert!((tnm.confidence - 0.65).abs() < f32::EPSILON);
    }
}
