use super::CancerStager;
use crate::models::{
    CancerType, MCategory, MedicalFeatures, NCategory, StageGroup, TCategory, TnmClassification,
};

/// Gallbladder cancer staging. Liver invasion overrides size for T.
pub struct GallbladderStager;

impl CancerStager for GallbladderStager {
    fn cancer_type(&self) -> CancerType {
        CancerType::Gallbladder
    }

    fn stage(&self, features: &MedicalFeatures) -> TnmClassification {
        let t = if features.liver_invasion {
            TCategory::T3
        } else if features.tumor_size_cm > 2.0 {
            TCategory::T2
        } else if features.tumor_size_cm > 0.0 {
            TCategory::T1
        } else {
            TCategory::Tx
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
            StageGroup::IvB
        } else if t == TCategory::T3 && n != NCategory::N0 {
            StageGroup::IvA
        } else if t == TCategory::T3 {
            StageGroup::IiiB
        } else if t == TCategory::T2 && n == NCategory::N0 {
            StageGroup::II
        } else if matches!(t, TCategory::T1 | TCategory::T2) && n != NCategory::N0 {
            StageGroup::IiiA
        } else if t == TCategory::T1 && n == NCategory::N0 {
            StageGroup::I
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

    fn features(size: f32, nodes: u32, mets: bool, liver: bool) -> MedicalFeatures {
        MedicalFeatures {
            cancer_type: Some(CancerType::Gallbladder),
            tumor_size_cm: size,
            lymph_nodes_involved: nodes,
            distant_metastasis: mets,
            liver_invasion: liver,
            ..MedicalFeatures::default()
        }
    }

    #[test]
    fn small_tumor_no_nodes_is_stage_i() {
        let tnm = GallbladderStager.stage(&features(1.5, 0, false, false));
        assert_eq!(tnm.t, TCategory::T1);
        assert_eq!(tnm.n, NCategory::N0);
        assert_eq!(tnm.stage_group, StageGroup::I);
    }

    #[test]
    fn larger_tumor_no_nodes_is_stage_ii() {
        let tnm = GallbladderStager.stage(&features(3.0, 0, false, false));
        assert_eq!(tnm.t, TCategory::T2);
        assert_eq!(tnm.stage_group, StageGroup::II);
    }

    #[test]
    fn node_involvement_upgrades_to_iiia() {
        let tnm = GallbladderStager.stage(&features(1.5, 2, false, false));
        assert_eq!(tnm.n, NCategory::N1);
        assert_eq!(tnm.stage_group, StageGroup::IiiA);
    }

    #[test]
    fn liver_invasion_forces_t3() {
        let tnm = GallbladderStager.stage(&features(1.0, 0, false, true));
        assert_eq!(tnm.t, TCategory::T3);
        assert_eq!(tnm.stage_group, StageGroup::IiiB);
    }

    #[test]
    fn liver_invasion_with_nodes_is_iva() {
        let tnm = GallbladderStager.stage(&features(2.5, 1, false, true));
        assert_eq!(tnm.stage_group, StageGroup::IvA);
    }

    #[test]
    fn metastasis_dominates_everything() {
        let tnm = GallbladderStager.stage(&features(1.0, 0, true, false));
        assert_eq!(tnm.m, MCategory::M1);
        assert_eq!(tnm.stage_group, StageGroup::IvB);
    }

    #[test]
    fn many_nodes_is_n2() {
        let tnm = GallbladderStager.stage(&features(1.0, 5, false, false));
        assert_eq!(tnm.n, NCategory::N2);
        assert_eq!(tnm.stage_group, StageGroup::IiiA);
    }

    #[test]
    fn no_size_no_findings_is_unknown() {
        let tnm = GallbladderStager.stage(&features(0.0, 0, false, false));
        assert_eq!(tnm.t, TCategory::Tx);
        assert_eq!(tnm.stage_group, StageGroup::Unknown);
    }
}
