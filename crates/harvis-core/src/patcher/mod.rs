//! Report patching: validates the document, then applies the substitution
//! strategy to produce the render-ready text.

mod rules;
mod substitute;

pub use rules::{AnalyzerRules, PatchRules, AUTO_HIDE_CALL, CHART_DATA_ASSIGN, INIT_SENTINEL, LABEL_TEMPLATE};
pub use substitute::{replace_first, replace_first_n};

use crate::error::CorrelateError;
use crate::frequency::FrequencyIndex;

/// Patched report text, produced fresh per correlate call and never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct PatchedDocument {
    text: String,
}

impl PatchedDocument {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Gate on the initialization sentinel, then apply `rules`.
///
/// The gate is the only hard failure; a document that passes it but lacks
/// later markers is patched as far as its markers allow.
pub fn patch(
    report_text: &str,
    freq: &FrequencyIndex,
    rules: &dyn PatchRules,
) -> Result<PatchedDocument, CorrelateError> {
    if !report_text.contains(rules.init_sentinel()) {
        return Err(CorrelateError::InvalidReportFormat);
    }
    Ok(PatchedDocument {
        text: rules.apply(report_text, freq),
    })
}
