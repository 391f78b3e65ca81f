use anyhow::{Context, Result};
use beatpack::{JobConfig, JobOverrides, Mode, OutputFormat, Preset, inspect, run_job};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rechunk vector files into bus-width beats and write them out
    Run {
        /// JSON job file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Constant set to start from
        #[arg(short, long)]
        preset: Option<Preset>,

        /// Chunking strategy
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Beat width in symbols
        #[arg(short, long)]
        width: Option<usize>,

        /// Output layout
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Vector files, read in order
        inputs: Vec<PathBuf>,
    },
    /// Describe the input stream as JSON without writing anything
    Inspect {
        /// Chunking strategy used for the projection
        #[arg(short, long, default_value = "window")]
        mode: Mode,

        /// Beat width used for the projection
        #[arg(short, long, default_value_t = beatpack::WINDOW_BUS_WIDTH)]
        width: usize,

        /// Vector files, read in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip_all)]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            preset,
            mode,
            width,
            format,
            output,
            inputs,
        } => {
            let file = match &config {
                Some(path) => JobOverrides::from_file(path)?,
                None => JobOverrides::default(),
            };
            let flags = JobOverrides {
                preset,
                mode,
                width,
                inputs: (!inputs.is_empty()).then_some(inputs),
                output,
                format,
            };

            let job = JobConfig::resolve(Preset::default(), &[&file, &flags]);
            let report = run_job(&job)?;

            println!(
                "{} beats of {} symbols written to {} ({} mode, {} input records)",
                report.records_written,
                report.width,
                job.output.display(),
                report.mode,
                report.input_records
            );
        }
        Commands::Inspect {
            mode,
            width,
            inputs,
        } => {
            let report = inspect(&inputs, mode, width)?;
            let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
            println!("{}", json);
        }
    }

    Ok(())
}
