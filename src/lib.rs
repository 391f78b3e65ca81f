// Public API exports
pub mod config;
pub mod pipeline;
pub mod rechunker;
pub mod sink;
pub mod stream;

// Re-export main types for convenience
pub use config::{ConfigError, JobConfig, JobOverrides, Preset};
pub use pipeline::{RechunkReport, StreamReport, inspect, run_job, run_with};
pub use rechunker::{FLAT_BUS_WIDTH, Mode, RechunkError, Rechunked, WINDOW_BUS_WIDTH, rechunk};
pub use sink::{FileSink, MemorySink, OutputFormat, RecordSink, WriteError, write};
pub use stream::{
    FileSource, LoadError, MemorySource, RecordEntry, SymbolStream, SymbolStreamBuilder,
    VectorSource, load,
};
