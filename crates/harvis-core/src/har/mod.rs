//! HAR capture source: raw capture text plus a stable identity, so
//! downstream caches can key on "which capture" instead of hashing content.

mod extract;
mod parse;

pub use extract::extract_identities;

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::CorrelateError;

/// Identity of a loaded capture, used as the cache key.
pub type CaptureId = u64;

static NEXT_CAPTURE_ID: AtomicU64 = AtomicU64::new(1);

/// A loaded HAR document. The text is immutable for the capture's lifetime;
/// two captures loaded from identical bytes still get distinct ids.
#[derive(Debug)]
pub struct HarCapture {
    id: CaptureId,
    text: String,
}

impl HarCapture {
    /// Wraps already-loaded HAR text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            id: NEXT_CAPTURE_ID.fetch_add(1, Ordering::Relaxed),
            text: text.into(),
        }
    }

    /// Reads a capture from disk. Read or decode failure is a retrieval
    /// error; the capture never comes into existence.
    pub async fn from_path(path: &Path) -> Result<Self, CorrelateError> {
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            CorrelateError::Retrieval(format!("read HAR file {}: {}", path.display(), e))
        })?;
        Ok(Self::from_text(text))
    }

    pub fn id(&self) -> CaptureId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filename::FilenameResolver;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn extract_drops_non_file_entries_and_keeps_duplicates() {
        let har = r#"{
            "log": {
                "entries": [
                    { "request": { "url": "https://x/a.js?x=1" } },
                    { "request": { "url": "https://x/a.js" } },
                    { "request": { "url": "https://x/b" } }
                ]
            }
        }"#;
        let mut resolver = FilenameResolver::new();
        let identities = extract_identities(har, &mut resolver).unwrap();
        assert_eq!(identities, ["a.js", "a.js"]);
    }

    #[test]
    fn extract_tolerates_extra_har_fields() {
        let har = r#"{
            "log": {
                "version": "1.2",
                "creator": { "name": "devtools", "version": "1" },
                "entries": [
                    {
                        "request": { "url": "https://x/app.css", "method": "GET", "headers": [] },
                        "response": { "status": 200 }
                    }
                ]
            }
        }"#;
        let mut resolver = FilenameResolver::new();
        let identities = extract_identities(har, &mut resolver).unwrap();
        assert_eq!(identities, ["app.css"]);
    }

    #[test]
    fn extract_malformed_json_is_capture_error() {
        let mut resolver = FilenameResolver::new();
        let err = extract_identities("{not json", &mut resolver).unwrap_err();
        assert!(matches!(err, CorrelateError::MalformedCapture(_)));
    }

    #[test]
    fn extract_missing_required_fields_is_capture_error() {
        let mut resolver = FilenameResolver::new();
        for har in [
            r#"{}"#,
            r#"{"log":{}}"#,
            r#"{"log":{"entries":[{"request":{}}]}}"#,
        ] {
            let err = extract_identities(har, &mut resolver).unwrap_err();
            assert!(matches!(err, CorrelateError::MalformedCapture(_)), "input: {har}");
        }
    }

    #[test]
    fn captures_get_distinct_ids_even_for_equal_text() {
        let a = HarCapture::from_text("{}");
        let b = HarCapture::from_text("{}");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.text(), b.text());
    }

    #[tokio::test]
    async fn from_path_reads_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(br#"{"log":{"entries":[]}}"#).unwrap();
        f.flush().unwrap();
        let capture = HarCapture::from_path(f.path()).await.unwrap();
        assert_eq!(capture.text(), r#"{"log":{"entries":[]}}"#);
    }

    #[tokio::test]
    async fn from_path_missing_file_is_retrieval_error() {
        let err = HarCapture::from_path(Path::new("/nonexistent/capture.har"))
            .await
            .unwrap_err();
        assert!(matches!(err, CorrelateError::Retrieval(_)));
    }
}
