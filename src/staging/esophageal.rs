use super::CancerStager;
use crate::models::{
    CancerType, MCategory, MedicalFeatures, NCategory, StageGroup, TCategory, TnmClassification,
    TumorDepth,
};

/// Esophageal cancer staging. T is driven by invasion depth, not size.
pub struct EsophagealStager;

impl CancerStager for EsophagealStager {
    fn cancer_type(&self) -> CancerType {
        CancerType::Esophageal
    }

    fn stage(&self, features: &MedicalFeatures) -> TnmClassification {
        let t = match features.tumor_depth {
            TumorDepth::Mucosa => TCategory::T1,
            TumorDepth::Submucosa => TCategory::T1b,
            TumorDepth::Muscularis | TumorDepth::MuscularisPropria => TCategory::T2,
            TumorDepth::Adventitia => TCategory::T3,
            TumorDepth::AdjacentStructures => TCategory::T4,
            _ => TCategory::Tx,
        };

        let n = match features.lymph_nodes_involved {
            0 => NCategory::N0,
            1..=2 => NCategory::N1,
            3..=6 => NCategory::N2,
            _ => NCategory::N3,
        };

        let m = if features.distant_metastasis {
            MCategory::M1
        } else {
            MCategory::M0
        };

        let stage_group = if m == MCategory::M1 {
            StageGroup::IvB
        } else if t == TCategory::T4 || n == NCategory::N3 {
            StageGroup::IvA
        } else if matches!(t, TCategory::T2 | TCategory::T3)
            && matches!(n, NCategory::N0 | NCategory::N1)
        {
            StageGroup::II
        } else if t == TCategory::T1 && n == NCategory::N0 {
            StageGroup::I
        } else {
            StageGroup::III
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
