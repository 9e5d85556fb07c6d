use super::CancerStager;
use crate::models::{
    CancerType, MCategory, MedicalFeatures, NCategory, StageGroup, TCategory, TnmClassification,
};

/// Head & neck cancer staging. Finer node bands than the other tables
/// and a genuine "II–III" grouping for intermediate disease.
pub struct HeadNeckStager;

impl CancerStager for HeadNeckStager {
    fn cancer_type(&self) -> CancerType {
        CancerType::HeadAndNeck
    }

    fn stage(&self, features: &MedicalFeatures) -> TnmClassification {
        let t = if features.tumor_size_cm <= 2.0 {
            TCategory::T1
        } else if features.tumor_size_cm <= 4.0 {
            TCategory::T2
        } else {
            TCategory::T3
        };

        let n = match features.lymph_nodes_involved {
            0 => NCategory::N0,
            1 => NCategory::N1,
            2..=3 => NCategory::N2,
            _ => NCategory::N3,
        };

        let m = if features.distant_metastasis {
            MCategory::M1
        } else {
            MCategory::M0
        };

        let stage_group = if m == MCategory::M1 {
            StageGroup::IvC
        } else if t == TCategory::T1 && n == NCategory::N0 {
            StageGroup::I
        } else if matches!(t, TCategory::T1 | TCategory::T2)
            && matches!(n, NCategory::N1 | NCategory::N2)
        {
            StageGroup::IiToIii
        } else if t == TCategory::T3 || n == NCategory::N3 {
            StageGroup::IV
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
            cancer_type: Some(CancerType::HeadAndNeck),
            tumor_size_cm: size,
            lymph_nodes_involved: nodes,
            distant_metastasis: mets,
            ..MedicalFeatures::default()
        }
    }

    #[test]
    fn small_node_negative_is_stage_i() {
        let tnm = HeadNeckStager.stage(&features(1.5, 0, false));
        assert_eq!(tnm.t, TCategory::T1);
        assert_eq!(tnm.stage_group, StageGroup::I);
    }

    #[test]
    fn size_bands_match_table() {
        assert_eq!(HeadNeckStager.stage(&features(2.0, 0, false)).t, TCategory::T1);
        assert_eq!(HeadNeckStager.stage(&features(3.0, 0, false)).t, TCategory::T2);
        assert_eq!(HeadNeckStager.stage(&features(4.0, 0, false)).t, TCategory::T2);
        assert_eq!(HeadNeckStager.stage(&features(4.5, 0, false)).t, TCategory::T3);
    }

    #[test]
    fn single_node_is_n1_intermediate_group() {
        let tnm = HeadNeckStager.stage(&features(1.5, 1, false));
        assert_eq!(tnm.n, NCategory::N1);
        assert_eq!(tnm.stage_group, StageGroup::IiToIii);
    }

    #[test]
    fn two_to_three_nodes_is_n2() {
        let tnm = HeadNeckStager.stage(&features(3.0, 3, false));
        assert_eq!(tnm.n, NCategory::N2);
        assert_eq!(tnm.stage_group, StageGroup::IiToIii);
    }

    #[test]
    fn large_tumor_is_stage_iv() {
        let tnm = HeadNeckStager.stage(&features(5.0, 0, false));
        assert_eq!(tnm.t, TCategory::T3);
        assert_eq!(tnm.stage_group, StageGroup::IV);
    }

    #[test]
    fn four_nodes_is_n3_stage_iv() {
        let tnm = HeadNeckStager.stage(&features(1.0, 4, false));
        assert_eq!(tnm.n, NCategory::N3);
        assert_eq!(tnm.stage_group, StageGroup::IV);
    }

    #[test]
    fn metastasis_is_ivc() {
        let tnm = HeadNeckStager.stage(&features(1.0, 0, true));
        assert_eq!(tnm.stage_group, StageGroup::IvC);
    }

    #[test]
    fn t2_node_negative_has_no_grouping() {
        // T2 N0 falls through every arm of the table
        let tnm = HeadNeckStager.stage(&features(3.0, 0, false));
        assert_eq!(tnm.stage_group, StageGroup::Unknown);
    }
}
