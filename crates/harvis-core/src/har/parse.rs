//! Minimal HAR 1.2 structures: only the fields the correlation consumes.

use serde::Deserialize;

/// Top-level HAR wrapper.
#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub log: HarRoot,
}

#[derive(Debug, Deserialize)]
pub struct HarRoot {
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
}

#[derive(Debug, Deserialize)]
pub struct HarRequest {
    pub url: String,
}
