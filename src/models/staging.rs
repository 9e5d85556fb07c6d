use serde::{Deserialize, Serialize};

use super::enums::{MCategory, NCategory, StageGroup, TCategory};

/// Pointer to the clinical practice guideline backing a staging result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineRef {
    /// NCCN short code, e.g. "nscl".
    pub code: String,
    pub title: String,
    pub url: String,
}

/// TNM classification produced by a per-cancer decision table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TnmClassification {
    pub t: TCategory,
    pub n: NCategory,
    pub m: MCategory,
    pub stage_group: StageGroup,
    /// Carried over from the feature extractor: how confident we are in
    /// the inputs, not in the table itself (the table is deterministic).
    pub confidence: f32,
    pub guideline: Option<GuidelineRef>,
}

impl TnmClassification {
    /// Result for reports whose cancer type is missing or unsupported.
    pub fn not_available() -> Self {
        Self {
            t: TCategory::Tx,
            n: NCategory::N0,
            m: MCategory::M0,
            stage_group: StageGroup::NotAvailable,
            confidence: 0.0,
            guideline: None,
        }
    }

    /// Compact "T2 N1 M0" rendering for logs and summaries.
    pub fn tnm_notation(&self) -> String {
        format!("{} {} {}", self.t.as_str(), self.n.as_str(), self.m.as_str())
    }
}
