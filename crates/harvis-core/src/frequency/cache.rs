//! Per-capture memoization of the frequency index.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CorrelateError;
use crate::filename::FilenameResolver;
use crate::har::{self, CaptureId, HarCapture};

use super::FrequencyIndex;

/// Caches one built index per capture id.
///
/// The correlation flow asks for the same capture's index twice (patch step,
/// then handshake selection); the second request must not re-parse or yield
/// a different result.
#[derive(Debug, Default)]
pub struct FrequencyCache {
    entries: HashMap<CaptureId, Arc<FrequencyIndex>>,
}

impl FrequencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the capture's index, extracting and counting at most once.
    pub fn get_or_build(
        &mut self,
        capture: &HarCapture,
        resolver: &mut FilenameResolver,
    ) -> Result<Arc<FrequencyIndex>, CorrelateError> {
        if let Some(hit) = self.entries.get(&capture.id()) {
            return Ok(Arc::clone(hit));
        }
        let identities = har::extract_identities(capture.text(), resolver)?;
        let index = Arc::new(FrequencyIndex::from_identities(identities));
        self.entries.insert(capture.id(), Arc::clone(&index));
        Ok(index)
    }
}
