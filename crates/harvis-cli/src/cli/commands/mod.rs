//! Subcommand implementations.

mod check_report;
mod correlate;
mod frequencies;

pub use check_report::run_check_report;
pub use correlate::run_correlate;
pub use frequencies::run_frequencies;
