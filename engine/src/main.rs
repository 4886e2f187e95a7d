// Engine main entry point: parse a file of newline-delimited export record
// strings and emit one JSON result per record plus a summary record.
use anyhow::{anyhow, bail, Context};
use engine::config::settings::EngineSettings;
use engine::services::parse_service::ParseService;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the JSON-lines output.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let (records_path, config_path) = parse_args()?;

    let settings = match &config_path {
        Some(path) => EngineSettings::from_file(path)
            .with_context(|| format!("Failed to load settings from '{}'", path.display()))?,
        None => EngineSettings::default(),
    };

    info!(records = %records_path.display(), "Starting currency parse run");

    let file = File::open(&records_path)
        .with_context(|| format!("Failed to open records file '{}'", records_path.display()))?;
    let records: Vec<String> = BufReader::new(file)
        .lines()
        .collect::<Result<_, _>>()
        .context("Failed to read records")?;

    let service = ParseService::new(settings);
    let (results, summary) = service.parse_records(records).await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for amount in &results {
        serde_json::to_writer(&mut out, amount)?;
        out.write_all(b"\n")?;
    }
    serde_json::to_writer(&mut out, &summary)?;
    out.write_all(b"\n")?;

    Ok(())
}

fn parse_args() -> anyhow::Result<(PathBuf, Option<PathBuf>)> {
    let mut records_path = None;
    let mut config_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let value = args
                .next()
                .ok_or_else(|| anyhow!("--config requires a path"))?;
            config_path = Some(PathBuf::from(value));
        } else if records_path.is_none() {
            records_path = Some(PathBuf::from(arg));
        } else {
            bail!("Unexpected argument '{}'", arg);
        }
    }

    let records_path = records_path
        .ok_or_else(|| anyhow!("Usage: engine <records.txt> [--config <settings.json>]"))?;
    Ok((records_path, config_path))
}
