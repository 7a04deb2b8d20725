//! Filename identity: the join key between a HAR capture and the report's
//! per-item labels.
//!
//! The identity of a URL is its last path segment when that segment looks
//! like a file (contains a dot), otherwise the empty string ("not a file,
//! ignore"). Two URLs with the same last segment share one identity; that
//! precision loss is accepted.

mod resolve;

pub use resolve::identity_from_url;

use std::collections::HashMap;

/// Identity derived from a URL; empty means "not a file".
pub type FilenameIdentity = String;

/// Memoizing wrapper around [`identity_from_url`].
///
/// The memo table is owned by the correlation session rather than being
/// process-global, so sessions do not leak entries into each other. Inputs
/// come from one capture's finite URL set, so the table is unbounded.
#[derive(Debug, Default)]
pub struct FilenameResolver {
    cache: HashMap<String, FilenameIdentity>,
}

impl FilenameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a URL to its filename identity, deriving at most once per
    /// distinct input string.
    pub fn resolve(&mut self, url: &str) -> FilenameIdentity {
        if let Some(hit) = self.cache.get(url) {
            return hit.clone();
        }
        let identity = identity_from_url(url);
        self.cache.insert(url.to_string(), identity.clone());
        identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_segment_is_returned_exactly() {
        let mut resolver = FilenameResolver::new();
        assert_eq!(resolver.resolve("https://x/a/b/file.js"), "file.js");
        assert_eq!(resolver.resolve("https://cdn.example.com/app.min.js"), "app.min.js");
    }

    #[test]
    fn query_string_is_stripped() {
        let mut resolver = FilenameResolver::new();
        assert_eq!(resolver.resolve("https://x/a.js?v=1&cache=0"), "a.js");
    }

    #[test]
    fn non_file_segment_is_empty_identity() {
        let mut resolver = FilenameResolver::new();
        assert_eq!(resolver.resolve("https://x/api"), "");
        assert_eq!(resolver.resolve("https://x/api?name=a.js"), "");
        assert_eq!(resolver.resolve("https://x/dir/"), "");
    }

    #[test]
    fn bare_label_resolves_to_itself() {
        // Report chunk labels are bare filenames; they pass through unchanged.
        let mut resolver = FilenameResolver::new();
        assert_eq!(resolver.resolve("vendors.js"), "vendors.js");
    }

    #[test]
    fn resolve_is_memoized_per_input() {
        let mut resolver = FilenameResolver::new();
        let first = resolver.resolve("https://x/a.js?v=1");
        let second = resolver.resolve("https://x/a.js?v=1");
        assert_eq!(first, second);
        assert_eq!(resolver.cache.len(), 1);

        resolver.resolve("https://x/a.js?v=2");
        assert_eq!(resolver.cache.len(), 2);
    }
}
