//! Correlation orchestration.
//!
//! Sequences one flow at a time: retrieve report text, gate on the
//! initialization sentinel, build the capture's frequency index, patch, and
//! hand the host the handshake wiring. Selection driving after the report
//! announces readiness lives here too, against the same session caches.

mod fetch;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::bridge::{self, Handshake, HandshakeOutcome, ReadySignal, ReportController};
use crate::config::HarvisConfig;
use crate::error::CorrelateError;
use crate::filename::FilenameResolver;
use crate::frequency::{FrequencyCache, FrequencyIndex};
use crate::har::HarCapture;
use crate::patcher::{self, AnalyzerRules, PatchRules, PatchedDocument};

/// Where the report document comes from.
#[derive(Debug, Clone)]
pub enum ReportSource {
    /// Fetched with an HTTP GET; final status >= 400 fails the flow.
    Url(String),
    /// Read from a local file; must decode as UTF-8 text.
    File(PathBuf),
}

/// Result of a successful correlate call: the render-ready document plus
/// the handshake wiring for the host surface.
#[derive(Debug)]
pub struct Correlation {
    /// Patched document to publish to the render surface.
    pub document: PatchedDocument,
    /// Fire side: the render surface calls `notify` when the embedded
    /// report announces readiness.
    pub signal: ReadySignal,
    /// Await side: pass to [`Correlator::drive_selection`].
    pub handshake: Handshake,
}

/// Owns the session caches and drives one correlation flow at a time.
/// Re-entrancy is excluded by the `&mut self` receivers; the busy flag is
/// observable state for the presentation layer.
#[derive(Debug)]
pub struct Correlator {
    config: HarvisConfig,
    resolver: FilenameResolver,
    freq_cache: FrequencyCache,
    rules: AnalyzerRules,
    busy: bool,
}

impl Correlator {
    pub fn new(config: HarvisConfig) -> Self {
        Self {
            config,
            resolver: FilenameResolver::new(),
            freq_cache: FrequencyCache::new(),
            rules: AnalyzerRules,
            busy: false,
        }
    }

    /// True only while a correlate call is in flight.
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Runs the full sequential flow. Every exit path clears the busy flag;
    /// on failure nothing is published.
    pub async fn correlate(
        &mut self,
        report: &ReportSource,
        capture: &HarCapture,
    ) -> Result<Correlation, CorrelateError> {
        self.busy = true;
        let result = self.run_flow(report, capture).await;
        self.busy = false;
        if let Err(err) = &result {
            tracing::warn!("correlation failed: {err}");
        }
        result
    }

    async fn run_flow(
        &mut self,
        report: &ReportSource,
        capture: &HarCapture,
    ) -> Result<Correlation, CorrelateError> {
        let report_text = self.retrieve_report(report).await?;
        if !report_text.contains(self.rules.init_sentinel()) {
            return Err(CorrelateError::InvalidReportFormat);
        }
        let freq = self.freq_cache.get_or_build(capture, &mut self.resolver)?;
        let document = patcher::patch(&report_text, &freq, &self.rules)?;
        let (signal, handshake) = bridge::channel();
        tracing::info!(
            distinct = freq.len(),
            requests = freq.total(),
            "report patched"
        );
        Ok(Correlation {
            document,
            signal,
            handshake,
        })
    }

    /// Retrieval + sentinel gate only; Ok means the document is patchable.
    pub async fn check_report(&self, report: &ReportSource) -> Result<(), CorrelateError> {
        let text = self.retrieve_report(report).await?;
        if text.contains(self.rules.init_sentinel()) {
            Ok(())
        } else {
            Err(CorrelateError::InvalidReportFormat)
        }
    }

    /// The capture's frequency index, cache-backed.
    pub fn frequencies(
        &mut self,
        capture: &HarCapture,
    ) -> Result<Arc<FrequencyIndex>, CorrelateError> {
        self.freq_cache.get_or_build(capture, &mut self.resolver)
    }

    /// Waits for the report's ready signal, settles, then issues the four
    /// selection mutations. Re-requests the capture's frequency index from
    /// the session cache; for a capture that went through [`correlate`]
    /// this is a hit, not a second parse.
    ///
    /// [`correlate`]: Correlator::correlate
    pub async fn drive_selection(
        &mut self,
        handshake: Handshake,
        capture: &HarCapture,
        controller: &mut dyn ReportController,
    ) -> Result<HandshakeOutcome, CorrelateError> {
        let freq = self.freq_cache.get_or_build(capture, &mut self.resolver)?;
        let settle = Duration::from_millis(self.config.handshake_delay_ms);
        Ok(bridge::drive(handshake, settle, controller, &freq, &mut self.resolver).await)
    }

    async fn retrieve_report(&self, report: &ReportSource) -> Result<String, CorrelateError> {
        match report {
            ReportSource::Url(url) => {
                let url = url.clone();
                let connect = Duration::from_secs(self.config.connect_timeout_secs);
                let total = Duration::from_secs(self.config.fetch_timeout_secs);
                tokio::task::spawn_blocking(move || fetch::fetch_report_text(&url, connect, total))
                    .await
                    .map_err(|e| CorrelateError::Retrieval(format!("fetch task failed: {e}")))?
            }
            ReportSource::File(path) => {
                tokio::fs::read_to_string(path).await.map_err(|e| {
                    CorrelateError::Retrieval(format!(
                        "read report file {}: {}",
                        path.display(),
                        e
                    ))
                })
            }
        }
    }
}
