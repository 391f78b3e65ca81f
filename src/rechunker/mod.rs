mod error;
mod flat;
mod window;


pub use error::RechunkError;

use crate::stream::SymbolStream;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bus width of the 96-bit beat used with 128-bit reference vectors, in hex symbols
pub const WINDOW_BUS_WIDTH: usize = 24;

/// Bus width of the 512-bit beat used for merged vector sets, in hex symbols
pub const FLAT_BUS_WIDTH: usize = 128;

/// Strategy used to cut the symbol stream into beats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Walk records with a running offset, spilling into the next record;
    /// a short trailing beat is dropped
    Window,
    /// Join everything and cut left to right; a short trailing beat is kept
    Flat,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Window => write!(f, "window"),
            Mode::Flat => write!(f, "flat"),
        }
    }
}

/// Output of a rechunk pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rechunked {
    /// Beats in stream order
    pub records: Vec<String>,
    /// Trailing beat discarded by window mode, if any
    pub dropped_tail: Option<String>,
}

/// Re-slice `stream` into beats of `width` symbols using `mode`
#[instrument(skip(stream), fields(symbols = stream.symbol_count()))]
pub fn rechunk(
    stream: &SymbolStream,
    mode: Mode,
    width: usize,
) -> Result<Rechunked, RechunkError> {
    if width == 0 {
        return Err(RechunkError::ZeroWidth);
    }

    let rechunked = match mode {
        Mode::Window => window::chunk(stream, width)?,
        Mode::Flat => Rechunked {
            records: flat::chunk(stream.symbols(), width),
            dropped_tail: None,
        },
    };

    debug!(
        beats = rechunked.records.len(),
        dropped = rechunked.dropped_tail.is_some(),
        "rechunked stream"
    );
    Ok(rechunked)
}

/// Number of beats `rechunk` would emit, without building them
pub fn projected_count(
    stream: &SymbolStream,
    mode: Mode,
    width: usize,
) -> Result<usize, RechunkError> {
    if width == 0 {
        return Err(RechunkError::ZeroWidth);
    }

    match mode {
        Mode::Flat => Ok(stream.symbol_count().div_ceil(width)),
        Mode::Window => window::chunk(stream, width).map(|r| r.records.len()),
    }
}
