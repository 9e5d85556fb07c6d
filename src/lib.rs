//! OncoStaging: a cancer-staging assistant pipeline.
//!
//! Takes a PET/CT or pathology report (PDF, DOCX, image, or plain text),
//! extracts its text, pulls staging-relevant features with regular
//! expressions, and maps them to a TNM classification through fixed
//! per-cancer decision tables.

pub mod config;
pub mod guidelines;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod staging;

pub use pipeline::processor::{ProcessingError, ProcessingStage, ReportProcessor};
pub use report::StagingReport;
