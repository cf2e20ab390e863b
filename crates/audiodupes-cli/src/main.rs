use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use audiodupes_core::{AssetRecord, GroupKey, Reporter, ReporterConfig, load_assets};

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "audiodupes",
    about = "Report audio assets whose titles appear more than once",
    version,
    long_about = None
)]
struct Cli {
    /// JSON file holding an array of audio records. Reads stdin when omitted or `-`.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output in JSON format (for scripts).
    /// Also enabled by setting AUDIODUPES_JSON=1.
    #[arg(long)]
    json: bool,

    /// Number of duplicate groups to list in detail (defaults to config, 20).
    #[arg(long)]
    limit: Option<usize>,

    /// Field the records are grouped on.
    #[arg(long, value_enum, default_value = "title")]
    by: ByArg,

    /// Mark the record a cleanup would keep in each group.
    #[arg(long)]
    suggest_keep: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ByArg {
    /// Normalized title.
    Title,
    /// Storage key; records without one are skipped.
    #[value(name = "s3key")]
    S3key,
}

impl From<ByArg> for GroupKey {
    fn from(arg: ByArg) -> Self {
        match arg {
            ByArg::Title => GroupKey::Title,
            ByArg::S3key => GroupKey::S3key,
        }
    }
}

// ─── Main ────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let start = Instant::now();
    let cli = Cli::parse();

    // ── Env var overrides ──────────────────────────────────────────────────
    let json_output = cli.json || std::env::var("AUDIODUPES_JSON").as_deref() == Ok("1");
    let timing = std::env::var("AUDIODUPES_TIMING").as_deref() == Ok("1");

    let config_path = ReporterConfig::config_path();
    let config = ReporterConfig::load_from(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    let records = read_records(cli.input.as_deref())?;
    if timing {
        eprintln!(
            "[timing] {} records loaded in {:.1}ms",
            records.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    let mut reporter = Reporter::new(config).with_group_key(cli.by.into());
    if let Some(limit) = cli.limit {
        reporter = reporter.with_detail_limit(limit);
    }
    let report = reporter.build(&records);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json_output {
        let dur = start.elapsed().as_millis();
        print_json(
            &mut out,
            &serde_json::json!({
                "status": "ok",
                "data": report,
                "meta": { "duration_ms": dur }
            }),
        )?;
    } else {
        reporter.render_text(&report, &mut out, cli.suggest_keep)?;
    }
    out.flush()?;

    if timing {
        eprintln!("[timing] total {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);
    }

    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = EnvFilter::try_from_env("AUDIODUPES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_records(input: Option<&Path>) -> Result<Vec<AssetRecord>> {
    match input {
        None => load_assets(io::stdin().lock()).context("failed to read audio records from stdin"),
        Some(path) if path == Path::new("-") => {
            load_assets(io::stdin().lock()).context("failed to read audio records from stdin")
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            load_assets(BufReader::new(file))
                .with_context(|| format!("failed to read audio records from {}", path.display()))
        }
    }
}

fn print_json<W: Write>(out: &mut W, val: &serde_json::Value) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(val)?)?;
    Ok(())
}
