use super::CancerStager;
use crate::models::{
    CancerType, MCategory, MedicalFeatures, NCategory, StageGroup, TCategory, TnmClassification,
    TumorDepth,
};

/// Colorectal cancer staging. T is driven by invasion depth; any node
/// involvement is at least Stage III.
pub struct ColorectalStager;

impl CancerStager for ColorectalStager {
    fn cancer_type(&self) -> CancerType {
        CancerType::Colorectal
    }

    fn stage(&self, features: &MedicalFeatures) -> TnmClassification {
        let t = match features.tumor_depth {
            TumorDepth::Submucosa => TCategory::T1,
            TumorDepth::Muscularis | TumorDepth::MuscularisPropria => TCategory::T2,
            TumorDepth::Subserosa => TCategory::T3,
            TumorDepth::Serosa | TumorDepth::AdjacentStructures => TCategory::T4,
            _ => TCategory::Tx,
        };

        let n = match features.lymph_nodes_involved {
            0 => NCategory::N0,
            1..=3 => NCategory::N1,
            _ => NCategory::N2,
        };

        let m = if features.distant_metastasis {
            MCategory::M1
        } else {
            MCategory::M0
        };

        let stage_group = if m == MCategory::M1 {
            StageGroup::IV
        } else if matches!(t, TCategory::T1 | TCategory::T2) && n == NCategory::N0 {
            StageGroup::I
        } else if t == TCategory::T3 && n == NCategory::N0 {
            StageGroup::II
        } else if matches!(n, NCategory::N1 | NCategory::N2) {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn features(depth: TumorDepth, nodes: u32, mets: bool) -> MedicalFeatures {
        MedicalFeatures {
            cancer_type: Some(CancerType::Colorectal),
            tumor_depth: depth,
            lymph_nodes_involved: nodes,
            distant_metastasis: mets,
            ..MedicalFeatures::default()
        }
    }

    #[test]
    fn submucosal_node_negative_is_stage_i() {
        let tnm = ColorectalStager.stage(&features(TumorDepth::Submucosa, 0, false));
        assert_eq!(tnm.t, TCategory::T1);
        assert_eq!(tnm.stage_group, StageGroup::I);
    }

    #[test]
    fn muscularis_propria_is_t2_stage_i() {
        let tnm = ColorectalStager.stage(&features(TumorDepth::MuscularisPropria, 0, false));
        assert_eq!(tnm.t, TCategory::T2);
        assert_eq!(tnm.stage_group, StageGroup::I);
    }

    #[test]
    fn subserosal_node_negative_is_stage_ii() {
        let tnm = ColorectalStager.stage(&features(TumorDepth::Subserosa, 0, false));
        assert_eq!(tnm.t, TCategory::T3);
        assert_eq!(tnm.stage_group, StageGroup::II);
    }

    #[test]
    fn any_node_involvement_is_stage_iii() {
        let tnm = ColorectalStager.stage(&features(TumorDepth::Submucosa, 1, false));
        assert_eq!(tnm.stage_group, StageGroup::III);
        let tnm = ColorectalStager.stage(&features(TumorDepth::Unknown, 6, false));
        assert_eq!(tnm.n, NCategory::N2);
        assert_eq!(tnm.stage_group, StageGroup::III);
    }

    #[test]
    fn serosal_involvement_is_t4() {
        let tnm = ColorectalStager.stage(&features(TumorDepth::Serosa, 0, false));
        assert_eq!(tnm.t, TCategory::T4);
        // T4 N0 has no arm in the grouping table
        assert_eq!(tnm.stage_group, StageGroup::Unknown);
    }

    #[test]
    fn metastasis_is_stage_iv() {
        let tnm = ColorectalStager.stage(&features(TumorDepth::Subserosa, 2, true));
        assert_eq!(tnm.stage_group, StageGroup::IV);
    }

    #[test]
    fn mucosal_only_depth_is_tx() {
        // In situ disease is not in the invasion table
        let tnm = ColorectalStager.stage(&features(TumorDepth::Mucosa, 0, false));
        assert_eq!(tnm.t, TCategory::Tx);
        assert_eq!(tnm.stage_group, StageGroup::Unknown);
    }
}
