//! `harvis frequencies` – show the capture's filename frequency index.

use anyhow::Result;
use std::path::Path;

use harvis_core::config::HarvisConfig;
use harvis_core::correlate::Correlator;
use harvis_core::har::HarCapture;

pub async fn run_frequencies(config: &HarvisConfig, har: &Path) -> Result<()> {
    let capture = HarCapture::from_path(har).await?;
    let mut correlator = Correlator::new(config.clone());
    let freq = correlator.frequencies(&capture)?;

    if freq.is_empty() {
        println!("No file-like requests in capture.");
        return Ok(());
    }

    println!("{:<8} FILENAME", "COUNT");
    for (identity, count) in freq.iter() {
        println!("{:<8} {}", count, identity);
    }
    println!("{} distinct, {} total", freq.len(), freq.total());
    Ok(())
}
