//! CLI for the harvis correlator.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use harvis_core::correlate::ReportSource;
use std::path::PathBuf;

use commands::{run_check_report, run_correlate, run_frequencies};

/// Top-level CLI for the harvis correlator.
#[derive(Debug, Parser)]
#[command(name = "harvis")]
#[command(about = "Correlate a HAR capture with a bundle-analyzer report", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Report source selection: exactly one of URL or local file.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ReportArgs {
    /// URL of report.html, fetched with an HTTP GET.
    #[arg(long, value_name = "URL")]
    pub report_url: Option<String>,

    /// Local report.html file.
    #[arg(long, value_name = "PATH")]
    pub report_file: Option<PathBuf>,
}

impl ReportArgs {
    pub fn to_source(&self) -> ReportSource {
        match (&self.report_url, &self.report_file) {
            (Some(url), _) => ReportSource::Url(url.clone()),
            (_, Some(path)) => ReportSource::File(path.clone()),
            _ => unreachable!("clap group requires exactly one report source"),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Patch a report with load marks derived from a HAR capture.
    Correlate {
        /// HAR file exported from the browser's network panel.
        #[arg(long, value_name = "PATH")]
        har: PathBuf,

        #[command(flatten)]
        report: ReportArgs,

        /// Where to write the patched document.
        #[arg(long, short = 'o', value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Print the filename frequency index extracted from a HAR capture.
    Frequencies {
        /// HAR file exported from the browser's network panel.
        #[arg(long, value_name = "PATH")]
        har: PathBuf,
    },

    /// Verify that a document is a patchable analyzer report.
    CheckReport {
        #[command(flatten)]
        report: ReportArgs,
    },
}

impl CliCommand {
    /// Parses argv and dispatches.
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config = harvis_core::config::load_or_init()?;
        match cli.command {
            CliCommand::Correlate { har, report, out } => {
                run_correlate(&config, &har, &report.to_source(), out.as_deref()).await
            }
            CliCommand::Frequencies { har } => run_frequencies(&config, &har).await,
            CliCommand::CheckReport { report } => {
                run_check_report(&config, &report.to_source()).await
            }
        }
    }
}
