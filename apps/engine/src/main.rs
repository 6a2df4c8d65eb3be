use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vitae_engine::{
    ats_breakdown, calculate_ats_score, Config, LlmParser, RawDocument, TextExtractor,
};

/// Runs the full intake pipeline over one file and prints a JSON report:
/// extract → parse → score → breakdown. This is the same call sequence the
/// upload layer performs, usable standalone for inspection and debugging.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("vitae_engine={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae engine v{}", env!("CARGO_PKG_VERSION"));

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: vitae <resume-file>");
    };

    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("failed to read '{path}'"))?;
    let name = Path::new(&path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(&path)
        .to_string();

    let extractor = TextExtractor::new(config.ocr_engine());
    let extraction = extractor.extract(&RawDocument::new(name, bytes));
    let Some(text) = extraction.text() else {
        bail!("unable to extract text from '{path}'");
    };
    info!("extracted {} characters", text.chars().count());

    let parser = LlmParser::new(&config);
    let record = parser.parse(text).await;
    info!("parsed record for {record}");

    let fields = record.ats_fields();
    let ats_score = calculate_ats_score(&fields);
    let (breakdown, suggestions) = ats_breakdown(&fields);

    let report = json!({
        "record": record,
        "ats_score": ats_score,
        "breakdown": breakdown,
        "suggestions": suggestions,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
