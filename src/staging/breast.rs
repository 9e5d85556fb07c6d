use super::CancerStager;
use crate::models::{
    CancerType, MCategory, MedicalFeatures, NCategory, StageGroup, TCategory, TnmClassification,
};

/// Breast cancer staging. Size-banded T, node-count-banded N.
pub struct BreastStager;

impl CancerStager for BreastStager {
    fn cancer_type(&self) -> CancerType {
        CancerType::Breast
    }

    fn stage(&self, features: &MedicalFeatures) -> TnmClassification {
        let t = if features.tumor_size_cm <= 2.0 {
            TCategory::T1
        } else if features.tumor_size_cm <= 5.0 {
            TCategory::T2
        } else {
            TCategory::T3
        };

        let n = match features.lymph_nodes_involved {
            0 => NCategory::N0,
            1..=3 => NCategory::N1,
            4..=9 => NCategory::N2,
            _ => NCategory::N3,
        };

        let m = if features.distant_metastasis {
            MCategory::M1
        } else {
            MCategory::M0
        };

        let stage_group = if m == MCategory::M1 {
            StageGroup::IV
        } else if t == TCategory::T1 && n == NCategory::N0 {
            StageGroup::I
        } else if matches!(t, TCategory::T1 | TCategory::T2) && n == NCategory::N1 {
            StageGroup::II
        } else if t == TCategory::T3 || matches!(n, NCategory::N2 | NCategory::N3) {
            StageGroup::III
        } else {
            StageGroup::Unknown
        };

        TnmClassification {
            t,
            n,
            m,
            stage_group,
            confidence: features.confidence_score,
            guideline: None,
        }
    }
}
