use super::{RechunkError, Rechunked};
use crate::stream::SymbolStream;
use tracing::warn;

/// Width-aware chaining over the records of `stream`
///
/// A running offset walks the current record. A beat that does not fit in
/// what is left of the record is completed from the start of the next one,
/// and the cursor moves on. The offset returns to zero exactly at a record
/// boundary. A short final beat is dropped.
pub(super) fn chunk(stream: &SymbolStream, width: usize) -> Result<Rechunked, RechunkError> {
    let record_width = stream.record_width().ok_or(RechunkError::EmptyStream)?;
    if width > record_width {
        return Err(RechunkError::WidthExceedsRecord {
            width,
            record_width,
        });
    }

    for entry in stream.ragged_entries() {
        warn!(
            origin = %entry.origin,
            length = entry.length,
            expected = record_width,
            "record width differs from first record"
        );
    }

    let mut records = Vec::new();
    let mut line = 0;
    let mut offset = 0;

    while let Some(current) = stream.record(line) {
        let remaining = record_width - offset;

        if remaining >= width {
            records.push(slice(current, offset, offset + width).iter().collect());
            offset += width;
            if offset == record_width {
                offset = 0;
                line += 1;
            }
            continue;
        }

        // spill into the next record
        let need = width - remaining;
        let mut beat: String = slice(current, offset, record_width).iter().collect();
        if let Some(next) = stream.record(line + 1) {
            beat.extend(slice(next, 0, need));
        }
        records.push(beat);

        line += 1;
        offset = need;
    }

    let dropped_tail = match records.last() {
        Some(last) if last.chars().count() < width => records.pop(),
        _ => None,
    };

    Ok(Rechunked {
        records,
        dropped_tail,
    })
}

/// `symbols[start..end]`, clamped to the slice bounds
fn slice(symbols: &[char], start: usize, end: usize) -> &[char] {
    let end = end.min(symbols.len());
    let start = start.min(end);
    &symbols[start..end]
}

#[cfg(test)]
mod window_tests {
    use super::*;

    #[test]
    fn test_slice_clamps() {
        let symbols: Vec<char> = "abcd".chars().collect();
        assert_eq!(slice(&symbols, 1, 3), &['b', 'c']);
        assert_eq!(slice(&symbols, 2, 10), &['c', 'd']);
        assert!(slice(&symbols, 6, 10).is_empty());
    }

    #[test]
    fn test_empty_stream() {
        let stream = SymbolStream::default();
        assert_eq!(chunk(&stream, 4), Err(RechunkError::EmptyStream));
    }

    #[test]
    fn test_width_exceeds_record() {
        let stream = SymbolStream::from_lines(&["abcd"]);
        assert_eq!(
            chunk(&stream, 5),
            Err(RechunkError::WidthExceedsRecord {
                width: 5,
                record_width: 4
            })
        );
    }
}
