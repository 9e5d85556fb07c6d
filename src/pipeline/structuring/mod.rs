pub mod patterns;
pub mod extractor;
pub mod validate;

pub use extractor::FeatureExtractor;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Input text is empty")]
    EmptyText,

    #[error("Extracted features failed validation: {0}")]
    Validation(String),
}
