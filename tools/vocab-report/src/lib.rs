//! Batch vocabulary report: reads a directory of exam scripts and answer
//! keys, ranks the vocabulary they share and writes spreadsheet reports.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod reader;
pub mod report;

pub use config::{AnalyzerConfig, Cli, ReportConfig};
pub use error::{ReportError, RunError};
pub use pipeline::{analyze, run, run_with, Analysis, Document, RunSummary};
pub use report::WrittenReports;

use vocab_parser::Annotator;

/// A finished run plus the report files it produced.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub reports: WrittenReports,
}

/// Run the analysis and write reports. Nothing is written when no unit
/// qualifies.
pub fn execute(config: &AnalyzerConfig) -> Result<RunOutcome, RunError> {
    let summary = run(config)?;
    Ok(finish(config, summary))
}

/// `execute` with a caller-supplied annotator in place of the model files.
pub fn execute_with<A: Annotator + ?Sized>(config: &AnalyzerConfig, annotator: &A) -> Result<RunOutcome, RunError> {
    let summary = run_with(config, annotator)?;
    Ok(finish(config, summary))
}

fn finish(config: &AnalyzerConfig, summary: RunSummary) -> RunOutcome {
    let reports = if summary.analysis.results.is_empty() {
        tracing::info!("no qualifying vocabulary, reports not written");
        WrittenReports::default()
    } else {
        report::write_reports(&summary.analysis.results, &summary.analysis.frequency_log, &config.report)
    };
    RunOutcome { summary, reports }
}
