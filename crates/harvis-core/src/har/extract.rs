//! Request-URL extraction over a parsed capture.

use crate::error::CorrelateError;
use crate::filename::{FilenameIdentity, FilenameResolver};

use super::parse::HarLog;

/// Parses HAR text and resolves every entry's request URL to a filename
/// identity, dropping non-file identities. Entry order is preserved, though
/// the next stage only counts.
pub fn extract_identities(
    har_text: &str,
    resolver: &mut FilenameResolver,
) -> Result<Vec<FilenameIdentity>, CorrelateError> {
    let har: HarLog = serde_json::from_str(har_text)
        .map_err(|e| CorrelateError::MalformedCapture(e.to_string()))?;
    Ok(har
        .log
        .entries
        .iter()
        .map(|entry| resolver.resolve(&entry.request.url))
        .filter(|identity| !identity.is_empty())
        .collect())
}
