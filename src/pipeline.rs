use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

use crate::config::JobConfig;
use crate::rechunker::{Mode, projected_count, rechunk};
use crate::sink::{FileSink, RecordSink};
use crate::stream::{SymbolStream, load};

/// Summary of one regeneration run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RechunkReport {
    pub mode: Mode,
    pub width: usize,
    pub input_records: usize,
    pub symbols: usize,
    pub records_written: usize,
    /// Length of the trailing beat dropped by window mode, 0 if none
    pub dropped_tail: usize,
}

/// Per-source record count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub origin: String,
    pub records: usize,
}

/// What a run over the given inputs would see, without writing anything
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamReport {
    pub record_count: usize,
    pub record_width: Option<usize>,
    pub symbol_count: usize,
    pub ragged_records: usize,
    pub sources: Vec<SourceReport>,
    pub mode: Mode,
    pub width: usize,
    pub projected_records: usize,
}

/// Load, rechunk and write according to `config`
#[instrument(skip_all, fields(mode = %config.mode, width = config.width))]
pub fn run_job(config: &JobConfig) -> Result<RechunkReport> {
    config.validate().context("Invalid job configuration")?;

    let stream = load(&config.inputs).context("Failed to load input vectors")?;
    let mut sink = FileSink::new(&config.output).format(config.format);

    let report = run_with(&stream, config, &mut sink)
        .with_context(|| format!("Failed to produce {}", config.output.display()))?;

    info!(
        output = %config.output.display(),
        records = report.records_written,
        "test vectors written"
    );
    Ok(report)
}

/// Rechunk an already loaded stream into any sink
pub fn run_with(
    stream: &SymbolStream,
    config: &JobConfig,
    sink: &mut dyn RecordSink,
) -> Result<RechunkReport> {
    let rechunked =
        rechunk(stream, config.mode, config.width).context("Failed to rechunk vectors")?;

    if let Some(tail) = &rechunked.dropped_tail {
        warn!(length = tail.chars().count(), "dropped incomplete trailing beat");
    }

    sink.write_records(&rechunked.records)
        .context("Failed to write records")?;

    Ok(RechunkReport {
        mode: config.mode,
        width: config.width,
        input_records: stream.record_count(),
        symbols: stream.symbol_count(),
        records_written: rechunked.records.len(),
        dropped_tail: rechunked
            .dropped_tail
            .as_ref()
            .map(|tail| tail.chars().count())
            .unwrap_or(0),
    })
}

/// Load `inputs` and describe the stream
#[instrument(skip_all, fields(inputs = inputs.len()))]
pub fn inspect(inputs: &[PathBuf], mode: Mode, width: usize) -> Result<StreamReport> {
    let stream = load(inputs).context("Failed to load input vectors")?;
    inspect_stream(&stream, mode, width)
}

pub fn inspect_stream(stream: &SymbolStream, mode: Mode, width: usize) -> Result<StreamReport> {
    let projected_records =
        projected_count(stream, mode, width).context("Cannot project output for this width")?;

    Ok(StreamReport {
        record_count: stream.record_count(),
        record_width: stream.record_width(),
        symbol_count: stream.symbol_count(),
        ragged_records: stream.ragged_entries().len(),
        sources: stream
            .origin_counts()
            .into_iter()
            .map(|(origin, records)| SourceReport {
                origin: origin.to_string(),
                records,
            })
            .collect(),
        mode,
        width,
        projected_records,
    })
}
