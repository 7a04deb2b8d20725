//! The fixed substitution set targeting webpack-bundle-analyzer output.
//!
//! The consumed literals below are the wire contract with the analyzer's
//! generated `report.html`; if the analyzer changes its output, this rule
//! set must be versioned, not worked around elsewhere in the pipeline.

use crate::frequency::FrequencyIndex;

use super::substitute::{replace_first, replace_first_n};

/// Marker that both proves "this is the right kind of document" and anchors
/// the bridge injection.
pub const INIT_SENTINEL: &str = "this.handleConcatenatedModulesContentToggle";

/// Mousemove auto-hide of the sidebar; present twice in the analyzer build.
pub const AUTO_HIDE_CALL: &str = "this.toggleVisibility(!1)";

/// Inert expression taking the value position of the call it replaces.
const AUTO_HIDE_NOOP: &str = "(1)";

/// Assignment that runs before the analyzer renders anything; injection
/// point for the frequency data.
pub const CHART_DATA_ASSIGN: &str = "window.chartData =";

/// Template fragment the analyzer uses for per-chunk checkbox labels.
pub const LABEL_TEMPLATE: &str = "`${n} (`";

const LABEL_TEMPLATE_MARKED: &str =
    "`${window.__harHits__[window.getUrlFilename(n)] ? '\u{2705}' + n : n} (`";

/// Substitution strategy over a report document.
///
/// One shipping implementation; kept behind a trait so a changed analyzer
/// output format becomes a new rule set instead of a pipeline change.
pub trait PatchRules {
    /// Sentinel whose absence rejects the document before patching.
    fn init_sentinel(&self) -> &'static str;

    /// Applies the full substitution sequence in fixed order. Individually
    /// missing markers are tolerated.
    fn apply(&self, report_text: &str, freq: &FrequencyIndex) -> String;
}

/// Rule set for webpack-bundle-analyzer `report.html` output.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyzerRules;

impl PatchRules for AnalyzerRules {
    fn init_sentinel(&self) -> &'static str {
        INIT_SENTINEL
    }

    fn apply(&self, report_text: &str, freq: &FrequencyIndex) -> String {
        // 1. Hand the host the root controller and announce readiness, then
        //    fall through to the untouched initialization call.
        let bridge = format!(
            "((window.parent.__reportVm__ = this) && (window.parent.dispatchEvent(new Event(\"report-ready\"))) && false),{INIT_SENTINEL}"
        );
        let text = replace_first(report_text, INIT_SENTINEL, &bridge);

        // 2. Neutralize the first two auto-hide triggers so the host's
        //    later pin survives; any further occurrences stay live.
        let text = replace_first_n(&text, AUTO_HIDE_CALL, AUTO_HIDE_NOOP, 2);

        // 3. Put the host resolver and the frequency data in scope before
        //    the chart data assignment evaluates.
        let inject = format!(
            "window.getUrlFilename = window.parent.getUrlFilename;window.__harHits__ = {};{CHART_DATA_ASSIGN}",
            freq.to_inline_json()
        );
        let text = replace_first(&text, CHART_DATA_ASSIGN, &inject);

        // 4. Check-mark chunk labels whose filename was actually requested.
        replace_first(&text, LABEL_TEMPLATE, LABEL_TEMPLATE_MARKED)
    }
}
