//! NCCN guideline references for staged reports.
//!
//! The static catalog always answers lookups offline; the cache layer
//! records when guideline metadata was last confirmed against nccn.org
//! and refreshes entries older than 30 days.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CancerType, GuidelineRef};

/// Refresh window for cached guideline metadata.
const CACHE_MAX_AGE_DAYS: i64 = 30;

struct GuidelineEntry {
    cancer_type: CancerType,
    code: &'static str,
    title: &'static str,
    url: &'static str,
}

const CATALOG: &[GuidelineEntry] = &[
    GuidelineEntry {
        cancer_type: CancerType::Gallbladder,
        code: "hepatobiliary",
        title: "NCCN Hepatobiliary Cancers",
        url: "https://www.nccn.org/professionals/physician_gls/pdf/hepatobiliary.pdf",
    },
    GuidelineEntry {
        cancer_type: CancerType::Esophageal,
        code: "esophageal",
        title: "NCCN Esophageal and Esophagogastric Junction Cancers",
        url: "https://www.nccn.org/professionals/physician_gls/pdf/esophageal.pdf",
    },
    GuidelineEntry {
        cancer_type: CancerType::Breast,
        code: "breast",
        title: "NCCN Breast Cancer",
        url: "https://www.nccn.org/professionals/physician_gls/pdf/breast.pdf",
    },
    GuidelineEntry {
        cancer_type: CancerType::Lung,
        code: "nscl",
        title: "NCCN Non-Small Cell Lung Cancer",
        url: "https://www.nccn.org/professionals/physician_gls/pdf/nscl.pdf",
    },
    GuidelineEntry {
        cancer_type: CancerType::Colorectal,
        code: "colon",
        title: "NCCN Colon Cancer",
        url: "https://www.nccn.org/professionals/physician_gls/pdf/colon.pdf",
    },
    GuidelineEntry {
        cancer_type: CancerType::HeadAndNeck,
        code: "head-and-neck",
        title: "NCCN Head and Neck Cancers",
        url: "https://www.nccn.org/professionals/physician_gls/pdf/head-and-neck.pdf",
    },
];

/// Guideline reference for a cancer type. Every supported type has one.
pub fn guideline_for(cancer_type: CancerType) -> GuidelineRef {
    let entry = CATALOG
        .iter()
        .find(|e| e.cancer_type == cancer_type)
        .expect("catalog covers every CancerType variant");

    GuidelineRef {
        code: entry.code.to_string(),
        title: entry.title.to_string(),
        url: entry.url.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GuidelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache serialization error: {0}")]
    Cache(#[from] serde_json::Error),

    #[error("Guideline fetch failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedGuideline {
    title: String,
    url: String,
    last_updated: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheData {
    entries: HashMap<String, CachedGuideline>,
}

/// JSON-file cache of guideline metadata, keyed by NCCN code.
pub struct GuidelinesCache {
    path: PathBuf,
    data: CacheData,
}

impl GuidelinesCache {
    /// Load the cache from disk, starting empty if the file is missing
    /// or unreadable (a stale cache is never fatal).
    pub fn load(path: &Path) -> Self {
        let data = std::fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(|| {
                tracing::debug!(path = %path.display(), "Starting with empty guidelines cache");
                CacheData::default()
            });

        Self {
            path: path.to_path_buf(),
            data,
        }
    }

    pub fn save(&self) -> Result<(), GuidelineError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Whether a cancer type's guideline metadata needs refreshing.
    pub fn is_stale(&self, cancer_type: CancerType, now: DateTime<Utc>) -> bool {
        let code = guideline_for(cancer_type).code;
        match self.data.entries.get(&code) {
            Some(cached) => now - cached.last_updated > Duration::days(CACHE_MAX_AGE_DAYS),
            None => true,
        }
    }

    pub fn mark_refreshed(&mut self, cancer_type: CancerType, now: DateTime<Utc>) {
        let guideline = guideline_for(cancer_type);
        self.data.entries.insert(
            guideline.code.clone(),
            CachedGuideline {
                title: guideline.title,
                url: guideline.url,
                last_updated: now,
            },
        );
    }

    /// Refresh stale entries by confirming each guideline URL still
    /// answers. Network failures are logged and skipped; lookups keep
    /// serving the static catalog regardless.
    pub fn refresh_stale(&mut self, client: &reqwest::blocking::Client) -> usize {
        let now = Utc::now();
        let mut refreshed = 0;

        for cancer_type in CancerType::ALL {
            if !self.is_stale(cancer_type, now) {
                continue;
            }

            let guideline = guideline_for(cancer_type);
            match client.head(&guideline.url).send() {
                Ok(resp) if resp.status().is_success() || resp.status().is_redirection() => {
                    self.mark_refreshed(cancer_type, now);
                    refreshed += 1;
                }
                Ok(resp) => {
                    tracing::warn!(
                        code = %guideline.code,
                        status = %resp.status(),
                        "Guideline URL check returned non-success"
                    );
                }
                Err(e) => {
                    tracing::warn!(code = %guideline.code, error = %e, "Guideline fetch failed");
                }
            }
        }

        if refreshed > 0 {
            if let Err(e) = self.save() {
                tracing::warn!(error = %e, "Could not persist guidelines cache");
            }
        }

        refreshed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cancer_type_has_a_guideline() {
        for ct in CancerType::ALL {
            let g = guideline_for(ct);
            assert!(!g.code.is_empty());
            assert!(g.url.starts_with("https://www.nccn.org/"));
            assert!(g.title.starts_with("NCCN"));
        }
    }

    #[test]
    fn lung_maps_to_nscl() {
        assert_eq!(guideline_for(CancerType::Lung).code, "nscl");
    }

    #[test]
    fn missing_cache_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = GuidelinesCache::load(&dir.path().join("nope.json"));
        assert!(cache.is_stale(CancerType::Breast, Utc::now()));
    }

    #[test]
    fn corrupt_cache_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "{ not json").unwrap();
        let cache = GuidelinesCache::load(&path);
        assert!(cache.is_stale(CancerType::Lung, Utc::now()));
    }

    #[test]
    fn refreshed_entry_is_fresh_within_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        let mut cache = GuidelinesCache::load(&path);

        let now = Utc::now();
        cache.mark_refreshed(CancerType::Colorectal, now);

        assert!(!cache.is_stale(CancerType::Colorectal, now));
        assert!(!cache.is_stale(CancerType::Colorectal, now + Duration::days(29)));
        assert!(cache.is_stale(CancerType::Colorectal, now + Duration::days(31)));
        // Other types untouched
        assert!(cache.is_stale(CancerType::Breast, now));
    }

    #[test]
    fn cache_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("cache.json");

        let now = Utc::now();
        let mut cache = GuidelinesCache::load(&path);
        cache.mark_refreshed(CancerType::Esophageal, now);
        cache.save().unwrap();

        let reloaded = GuidelinesCache::load(&path);
        assert!(!reloaded.is_stale(CancerType::Esophageal, now));
    }
}
