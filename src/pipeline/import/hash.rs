use std::path::Path;

use base64::Engine;
use sha2::{Digest, Sha256};

use super::ImportError;

/// Compute SHA-256 content hash for an uploaded report.
/// Stable per byte content, used as a dedup/caching key.
pub fn compute_content_hash(path: &Path) -> Result<String, ImportError> {
    let content = std::fs::read(path)?;
    let hash = Sha256::digest(&content);
    Ok(base64::engine::general_purpose::STANDARD.encode(hash))
}
