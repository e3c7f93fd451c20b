//! Compost Assessment CLI
//!
//! Reads one sample's readings from a JSON file (keyed by dataset column
//! names such as "MC(%)" or "C/N Ratio") and prints the assessment report.
//!
//! Usage: cargo run --bin assess_compost -- sample.json [--json] [--score 68.5]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use compost_assessor::{EngineConfig, JsonFormatter, MarkdownFormatter, ParameterSet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "assess_compost")]
#[command(about = "Assess compost maturity and plant suitability from lab readings")]
#[command(version)]
struct Cli {
    /// Path to a JSON object with all twelve readings
    params: PathBuf,

    /// Print the report as JSON instead of markdown
    #[arg(long)]
    json: bool,

    /// Use this quality score instead of the model prediction
    #[arg(long)]
    score: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "compost_assessor=warn,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let contents = fs::read_to_string(&cli.params)
        .with_context(|| format!("Failed to read parameters file: {}", cli.params.display()))?;
    let raw: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse parameters JSON: {}", cli.params.display()))?;
    let params = ParameterSet::from_json(&raw)?;

    let config = EngineConfig::from_env();
    let engine = config.build_engine()?;

    let report = match cli.score {
        Some(score) => engine.analyze_with_score(&params, score),
        None => engine.analyze_parameters(&params),
    };

    if cli.json {
        println!("{}", JsonFormatter::format(&report)?);
    } else {
        print!("{}", MarkdownFormatter::format(&report));
    }

    Ok(())
}
