//! Batch Vectorizer - Main Entry Point
//!
//! Invoked by the job scheduler with a manifest and an output directory;
//! prints exactly one JSON line on stdout.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vecbatch::{BatchProcessor, BatchReport, Settings, VectorizerKind};

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "vecbatch",
    version,
    about = "Process a batch of files for vectorization"
)]
struct Cli {
    /// JSON file containing the list of files to process
    batch_file: PathBuf,

    /// Directory to store vector outputs
    output_dir: PathBuf,

    /// Job identifier, used in log lines
    #[arg(long, default_value = "unknown")]
    job_id: String,

    /// Vectorizer to use for every file
    #[arg(long, value_enum)]
    vectorizer: Option<VectorizerKind>,

    /// Byte ceiling for reading a single file
    #[arg(long)]
    max_file_size: Option<usize>,

    /// Maximum number of TF-IDF features per vector
    #[arg(long)]
    max_features: Option<usize>,

    /// Optional config file (TOML, JSON or YAML)
    #[arg(long, env = "VECBATCH_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries only the summary line
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "vecbatch=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli, &mut io::stdout().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!(error = %format!("{:#}", e), "Batch vectorizer failed");
            ExitCode::FAILURE
        }
    }
}

/// Run one batch, writing the summary line to `out`. Returns the exit code.
fn run(cli: Cli, out: &mut impl Write) -> Result<u8> {
    if !cli.batch_file.exists() {
        error!(batch_file = %cli.batch_file.display(), "Batch file not found");
        return Ok(EXIT_FAILURE);
    }

    let settings = Settings::load(cli.config.as_deref())?.with_overrides(
        cli.max_file_size,
        cli.max_features,
        cli.vectorizer,
    )?;

    info!(
        job_id = %cli.job_id,
        vectorizer = %settings.vectorizer,
        max_file_size = settings.max_file_size,
        "Starting batch vectorizer v{}",
        env!("CARGO_PKG_VERSION")
    );

    let batch = BatchProcessor::new(&settings, cli.output_dir.clone());
    let report = batch.process_batch(&cli.batch_file, &cli.job_id);

    let line = report
        .to_json_line()
        .context("failed to serialize batch summary")?;
    writeln!(out, "{}", line).context("failed to write batch summary")?;
    out.flush().context("failed to write batch summary")?;

    Ok(exit_code(&report))
}

fn exit_code(report: &BatchReport) -> u8 {
    if report.success() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}
