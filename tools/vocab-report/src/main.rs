use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vocab_report::{execute, report, AnalyzerConfig, Cli};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = AnalyzerConfig::from(cli);

    println!("{}", "=".repeat(80));
    println!("VOCABULARY ANALYSIS");
    println!("{}", "=".repeat(80));

    let outcome = execute(&config)
        .with_context(|| format!("analysis of {} failed", config.data_dir.display()))?;
    let summary = &outcome.summary;

    println!(
        "📂 {} files found, {} processed, {} skipped",
        summary.files_found, summary.files_processed, summary.files_skipped
    );
    println!(
        "⚙️  Scoring: script x{}, answer x{}, minimum {}",
        config.scoring.script_weight, config.scoring.answer_weight, config.scoring.min_score
    );
    print!("{}", report::render_summary(&summary.analysis.results, config.report.top));

    for path in &outcome.reports.saved {
        println!("✅ Saved to: {}", path.display());
    }
    if outcome.reports.failed > 0 {
        println!("❌ {} report file(s) could not be written", outcome.reports.failed);
    }
    Ok(())
}
