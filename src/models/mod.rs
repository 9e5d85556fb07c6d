pub mod enums;
pub mod features;
pub mod staging;

pub use enums::*;
pub use features::MedicalFeatures;
pub use staging::{GuidelineRef, TnmClassification};

/// Returned when parsing an enum from its string form fails.
#[derive(Debug, thiserror::Error)]
#[error("invalid {field} value: '{value}'")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}
