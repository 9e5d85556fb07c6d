use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "OncoStaging";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default `tracing` filter when ONCOSTAGING_LOG / RUST_LOG are unset.
pub fn default_log_filter() -> String {
    "oncostaging=info".to_string()
}

/// Get the application data directory.
/// ~/OncoStaging/ on all platforms (user-visible).
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("OncoStaging")
}

/// Where the guidelines metadata cache lives.
pub fn guidelines_cache_path() -> PathBuf {
    app_data_dir().join("guidelines").join("guidelines_cache.json")
}

/// Maximum accepted upload size in bytes.
/// Override with ONCOSTAGING_MAX_FILE_SIZE_MB.
pub fn max_file_size_bytes() -> u64 {
    let mb = std::env::var("ONCOSTAGING_MAX_FILE_SIZE_MB")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(50);
    mb * 1024 * 1024
}

/// Extracted text beyond this length is truncated before feature extraction.
pub const MAX_TEXT_LEN: usize = 500_000;

/// Clinical plausibility limits for extracted values. Values above the
/// caps are clamped at extraction time; validation rejects anything that
/// still falls outside the range (NaN, negatives from bad parses).
#[derive(Debug, Clone, Copy)]
pub struct ClinicalLimits {
    pub max_tumor_size_cm: f32,
    pub max_lymph_nodes: u32,
}

impl Default for ClinicalLimits {
    fn default() -> Self {
        Self {
            max_tumor_size_cm: 50.0,
            max_lymph_nodes: 100,
        }
    }
}
