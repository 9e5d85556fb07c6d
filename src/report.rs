//! Final staging report: the pipeline's output value and its prose
//! rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{MedicalFeatures, StageGroup, TnmClassification};

/// Extraction stage summary carried in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub method: String,
    pub confidence: f32,
    pub page_count: usize,
    pub text_length: usize,
}

/// Everything the pipeline learned about one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagingReport {
    pub document_id: Uuid,
    pub source_filename: String,
    pub content_hash: String,
    pub extraction: ExtractionSummary,
    pub features: MedicalFeatures,
    pub tnm: TnmClassification,
    pub analyzed_at: DateTime<Utc>,
}

impl StagingReport {
    /// Plain prose rendering for terminal output.
    pub fn summary(&self) -> String {
        let mut out = String::new();

        match self.features.cancer_type {
            Some(ct) => {
                out.push_str(&format!("OncoStaging report — {}\n", ct.display_name()));
                if self.tnm.stage_group == StageGroup::Unknown {
                    out.push_str(&format!(
                        "TNM {}, but the findings do not map to a stage group.\n",
                        self.tnm.tnm_notation()
                    ));
                } else {
                    out.push_str(&format!(
                        "Stage {} ({})\n",
                        self.tnm.stage_group.as_str(),
                        self.tnm.tnm_notation()
                    ));
                }
            }
            None => {
                out.push_str("OncoStaging report\n");
                out.push_str("No supported cancer type was identified; staging is not available.\n");
            }
        }

        out.push('\n');
        out.push_str("Findings:\n");
        if self.features.tumor_size_cm > 0.0 {
            out.push_str(&format!("  tumor size: {} cm\n", self.features.tumor_size_cm));
        } else {
            out.push_str("  tumor size: not found\n");
        }
        out.push_str(&format!(
            "  lymph nodes involved: {}\n",
            self.features.lymph_nodes_involved
        ));
        out.push_str(&format!(
            "  distant metastasis: {}\n",
            if self.features.distant_metastasis { "yes" } else { "no" }
        ));
        if self.features.liver_invasion {
            out.push_str("  liver invasion: yes\n");
        }

        out.push('\n');
        out.push_str(&format!(
            "Source: {} ({}, {} page(s), extraction confidence {:.0}%)\n",
            self.source_filename,
            self.extraction.method,
            self.extraction.page_count,
            self.extraction.confidence * 100.0
        ));
        out.push_str(&format!(
            "Feature confidence: {:.0}%\n",
            self.features.confidence_score * 100.0
        ));

        if let Some(guideline) = &self.tnm.guideline {
            out.push_str(&format!("Reference: {} — {}\n", guideline.title, guideline.url));
        }

        out.push('\n');
        out.push_str(
            "This is an automated estimate derived from report text. \
             It is not a diagnosis and not medical advice; staging decisions \
             belong to the treating care team.\n",
        );

        out
    }
}
