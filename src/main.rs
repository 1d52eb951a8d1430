//! Interest Analyzer — Binary Entrypoint
//! Reads a batch of classified accounts (JSON array) and prints the interest
//! distribution, derived metrics, and the narrator payload.
//!
//! Usage:
//!   social-interest-analyzer <accounts.json>   # text report to stdout
//!   social-interest-analyzer - --json          # batch from stdin, JSON out
//!
//! Environment:
//!   ANALYZER_WEIGHTS_PATH  weights config (default: config/weights.json)
//!   ANALYZER_STRICT=1      reject contract violations instead of degrading
//!   RUST_LOG               tracing filter (default: warn)

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use social_interest_analyzer::report::{render_text, NarratorInput};
use social_interest_analyzer::weights::HotReloadWeights;
use social_interest_analyzer::{parse_accounts, AnalysisEngine, AnalysisResult, IngestMode};

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    analysis: &'a AnalysisResult,
    narrator_input: NarratorInput,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn read_batch(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading batch from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("reading batch from {source}"))
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let mut args = std::env::args().skip(1);
    let Some(source) = args.next() else {
        bail!("usage: social-interest-analyzer <accounts.json | -> [--json]");
    };
    let as_json = args.any(|a| a == "--json");

    let mode = if std::env::var("ANALYZER_STRICT").ok().as_deref() == Some("1") {
        IngestMode::Strict
    } else {
        IngestMode::Lenient
    };

    let weights_path = std::env::var("ANALYZER_WEIGHTS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config/weights.json"));
    let weights = HotReloadWeights::new(Some(&weights_path)).current();

    let json = read_batch(&source)?;
    let accounts = parse_accounts(&json, mode).context("ingesting classified batch")?;

    let engine = AnalysisEngine::new(weights);
    let w = engine.weights();
    debug!(
        w_instagram_category = w.w_instagram_category,
        w_bio = w.w_bio,
        w_primary = w.w_primary,
        w_secondary = w.w_secondary,
        path = %weights_path.display(),
        "active weights"
    );
    let result = engine.analyze(&accounts);

    if as_json {
        let out = JsonOutput {
            analysis: &result,
            narrator_input: NarratorInput::from_analysis(&result),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_text(&result));
    }

    Ok(())
}
