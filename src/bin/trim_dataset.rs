use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context;
use ate_nutrition::foods::trim::trim_dataset;

fn main() -> anyhow::Result<()> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args_os().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: trim-dataset <input.json> <output.json>");
    };
    let (input, output) = (PathBuf::from(input), PathBuf::from(output));

    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("read {}", input.display()))?;
    let doc = serde_json::from_str(&text).context("parse input dataset")?;
    let (trimmed, summary) = trim_dataset(doc)?;

    let file = File::create(&output).with_context(|| format!("create {}", output.display()))?;
    serde_json::to_writer(BufWriter::new(file), &trimmed).context("write trimmed dataset")?;

    tracing::info!(
        kept = summary.kept,
        removed = summary.removed,
        output = %output.display(),
        "dataset trimmed"
    );
    Ok(())
}
