//! `harvis check-report` – retrieval plus sentinel gate only.

use anyhow::Result;

use harvis_core::config::HarvisConfig;
use harvis_core::correlate::{Correlator, ReportSource};

pub async fn run_check_report(config: &HarvisConfig, report: &ReportSource) -> Result<()> {
    let correlator = Correlator::new(config.clone());
    correlator.check_report(report).await?;
    println!("Report OK: initialization sentinel present.");
    Ok(())
}
