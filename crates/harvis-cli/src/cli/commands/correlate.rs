//! `harvis correlate` – run the full patch pipeline and write the result.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use harvis_core::config::HarvisConfig;
use harvis_core::correlate::{Correlator, ReportSource};
use harvis_core::har::HarCapture;

pub async fn run_correlate(
    config: &HarvisConfig,
    har: &Path,
    report: &ReportSource,
    out: Option<&Path>,
) -> Result<()> {
    let capture = HarCapture::from_path(har).await?;
    let mut correlator = Correlator::new(config.clone());

    let correlation = correlator.correlate(report, &capture).await?;
    let freq = correlator.frequencies(&capture)?;

    let out = out
        .map(Path::to_path_buf)
        .or_else(|| config.default_output.clone())
        .unwrap_or_else(|| PathBuf::from("report.patched.html"));
    tokio::fs::write(&out, correlation.document.text())
        .await
        .with_context(|| format!("write patched report to {}", out.display()))?;
    tracing::info!(out = %out.display(), "patched report published");

    println!(
        "Patched report written to {} ({} distinct filenames, {} requests)",
        out.display(),
        freq.len(),
        freq.total()
    );
    println!("Open it in an embedding host to drive the selection handshake.");
    Ok(())
}
