use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use medirec::config::{self, AppSettings};
use medirec::ReportProcessor;

/// Analyze a clinical report and print ranked diagnostic test
/// recommendations as JSON.
#[derive(Parser)]
#[command(name = "medirec", version, about)]
struct Cli {
    /// Path to the clinical report (plain text).
    report: PathBuf,

    /// Rule table override: JSON document keyed by test name.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cli = Cli::parse();
    let mut settings = AppSettings::from_env();
    if cli.rules.is_some() {
        settings.rules_file = cli.rules;
    }

    let processor =
        ReportProcessor::from_settings(&settings).context("failed to load clinical rule table")?;
    let outcome = processor
        .process_file(&cli.report)
        .with_context(|| format!("failed to analyze {}", cli.report.display()))?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{json}");
    Ok(())
}
