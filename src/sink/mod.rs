mod error;
mod format;


pub use error::WriteError;
pub use format::{ASSIGN_STR, CLK_STR, OutputFormat, render_lines, render_stimulus};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Destination for rechunked beats
pub trait RecordSink {
    /// Write all records in order, replacing whatever the sink held before
    fn write_records(&mut self, records: &[String]) -> Result<(), WriteError>;
}

/// Output file, overwritten on every write
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    format: OutputFormat,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: OutputFormat::default(),
        }
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for FileSink {
    fn write_records(&mut self, records: &[String]) -> Result<(), WriteError> {
        // render fully before touching the file
        let text = self.format.render(records)?;

        fs::write(&self.path, text).map_err(|source| WriteError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), records = records.len(), "wrote records");
        Ok(())
    }
}

/// Collects rendered output in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub format: OutputFormat,
    pub text: String,
}

impl MemorySink {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            text: String::new(),
        }
    }
}

impl RecordSink for MemorySink {
    fn write_records(&mut self, records: &[String]) -> Result<(), WriteError> {
        self.text = self.format.render(records)?;
        Ok(())
    }
}

/// Write records one per line to `destination`, overwriting it
#[instrument(skip(records), fields(records = records.len()))]
pub fn write(records: &[String], destination: &Path) -> Result<(), WriteError> {
    FileSink::new(destination).write_records(records)
}
