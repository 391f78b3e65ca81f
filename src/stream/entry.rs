/// Position of a single input record inside the symbol arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    /// Symbol offset into the arena
    pub offset: usize,
    /// Length in symbols
    pub length: usize,
    /// Name of the source the record was read from (e.g., "ref_vec.txt")
    pub origin: String,
}
