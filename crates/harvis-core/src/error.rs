//! Error kinds surfaced by the correlation flow.

use thiserror::Error;

/// Terminal failures of a single correlation attempt.
///
/// All three are detected synchronously within the sequential flow and are
/// never retried automatically; none are fatal to the process, so the caller
/// can re-trigger with the same sources.
#[derive(Debug, Error)]
pub enum CorrelateError {
    /// Report URL invalid, HTTP status >= 400, or an unreadable/undecodable
    /// local source.
    #[error("report retrieval failed: {0}")]
    Retrieval(String),

    /// HAR text is not valid JSON or lacks `log.entries[].request.url`.
    #[error("HAR capture is malformed: {0}")]
    MalformedCapture(String),

    /// The retrieved document does not carry the initialization sentinel,
    /// so it is not a patchable report.
    #[error("not a recognizable report: initialization sentinel missing")]
    InvalidReportFormat,
}
