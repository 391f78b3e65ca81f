mod entry;
mod error;
mod source;


pub use entry::RecordEntry;
pub use error::LoadError;
pub use source::{FileSource, MemorySource, VectorSource};

use std::path::Path;
use tracing::{debug, instrument};

/// Immutable symbol stream backed by a single arena
///
/// Every non-empty input line becomes one record. Records are stored back to
/// back, so the arena itself is the flat concatenation of all inputs.
#[derive(Debug, Clone, Default)]
pub struct SymbolStream {
    /// All symbols of all records, in load order
    arena: Vec<char>,
    /// One entry per record, in load order
    index: Vec<RecordEntry>,
}

/// Mutable builder for constructing a symbol stream
#[derive(Debug, Default)]
pub struct SymbolStreamBuilder {
    arena: Vec<char>,
    index: Vec<RecordEntry>,
}

impl SymbolStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every non-empty line of `text` as a record tagged with `origin`
    ///
    /// Fails if `text` holds no records at all.
    pub fn add_text(&mut self, origin: &str, text: &str) -> Result<(), LoadError> {
        let before = self.index.len();

        for line in text.lines().filter(|line| !line.is_empty()) {
            let offset = self.arena.len();
            self.arena.extend(line.chars());

            self.index.push(RecordEntry {
                offset,
                length: self.arena.len() - offset,
                origin: origin.to_string(),
            });
        }

        let added = self.index.len() - before;
        if added == 0 {
            return Err(LoadError::Empty(origin.to_string()));
        }

        debug!(origin, records = added, "added source");
        Ok(())
    }

    /// Read a source and append its records
    pub fn add_source(&mut self, source: &dyn VectorSource) -> Result<(), LoadError> {
        let text = source.read_text()?;
        self.add_text(&source.name(), &text)
    }

    /// Chainable variant of [`add_source`](Self::add_source)
    pub fn with_source(mut self, source: &dyn VectorSource) -> Result<Self, LoadError> {
        self.add_source(source)?;
        Ok(self)
    }

    pub fn build(self) -> SymbolStream {
        SymbolStream {
            arena: self.arena,
            index: self.index,
        }
    }
}

impl SymbolStream {
    /// Build a stream straight from in-memory lines, skipping empty ones
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut builder = SymbolStreamBuilder::new();
        for line in lines.iter().map(AsRef::as_ref).filter(|l| !l.is_empty()) {
            // a single non-empty line always yields a record
            let _ = builder.add_text("memory", line);
        }
        builder.build()
    }

    /// Symbols of record `i`
    pub fn record(&self, i: usize) -> Option<&[char]> {
        self.index
            .get(i)
            .map(|entry| &self.arena[entry.offset..entry.offset + entry.length])
    }

    pub fn entries(&self) -> &[RecordEntry] {
        &self.index
    }

    pub fn record_count(&self) -> usize {
        self.index.len()
    }

    /// Width of the first record, the reference width W_in
    pub fn record_width(&self) -> Option<usize> {
        self.index.first().map(|entry| entry.length)
    }

    /// The whole stream as one flat symbol slice
    pub fn symbols(&self) -> &[char] {
        &self.arena
    }

    pub fn symbol_count(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Entries whose width differs from the first record's
    pub fn ragged_entries(&self) -> Vec<&RecordEntry> {
        let Some(width) = self.record_width() else {
            return Vec::new();
        };
        self.index.iter().filter(|e| e.length != width).collect()
    }

    /// Number of records per origin, in first-seen order
    pub fn origin_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for entry in &self.index {
            match counts.iter_mut().find(|(origin, _)| *origin == entry.origin) {
                Some((_, count)) => *count += 1,
                None => counts.push((entry.origin.as_str(), 1)),
            }
        }
        counts
    }
}

impl std::fmt::Display for SymbolStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.arena {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Load vector files in order and concatenate their records into one stream
#[instrument(skip_all, fields(inputs = paths.len()))]
pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<SymbolStream, LoadError> {
    let mut builder = SymbolStreamBuilder::new();
    for path in paths {
        builder.add_source(&FileSource::new(path.as_ref()))?;
    }

    let stream = builder.build();
    debug!(
        records = stream.record_count(),
        symbols = stream.symbol_count(),
        "loaded symbol stream"
    );
    Ok(stream)
}
