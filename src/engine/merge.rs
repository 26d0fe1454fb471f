//! Pure slide and merge transforms over a single line of tile values
//!
//! A move applies `merge` independently to every extracted line. The full
//! transform is slide, one pairwise pass, slide: compaction first, so a
//! merge only ever joins values that are adjacent after all gaps close,
//! and the pairwise pass advances two positions past each merged pair so a
//! freshly doubled value never merges again within the same move.

/// Compact non-zero values to the front of the line, preserving order
///
/// The returned line has the input's length, zero-padded at the tail.
pub fn slide(line: &[u32]) -> Vec<u32> {
    let mut compacted: Vec<u32> = line.iter().copied().filter(|&value| value != 0).collect();
    compacted.resize(line.len(), 0);
    compacted
}

/// Slide and merge a line toward index 0
///
/// Each adjacent equal pair in the compacted line becomes one doubled tile
/// followed by a zero; the trailing slide compacts those zeros out. The
/// non-zero sum of the input is conserved and the transform is idempotent
/// on its own output.
pub fn merge(line: &[u32]) -> Vec<u32> {
    let compacted = slide(line);
    let mut paired = vec![0_u32; compacted.len()];

    let mut index = 0;
    while index < compacted.len() {
        let current = compacted.get(index).copied().unwrap_or(0);
        let next = compacted.get(index + 1).copied();

        if current != 0 && next == Some(current) {
            if let Some(slot) = paired.get_mut(index) {
                *slot = current * 2;
            }
            index += 2;
        } else {
            if let Some(slot) = paired.get_mut(index) {
                *slot = current;
            }
            index += 1;
        }
    }

    slide(&paired)
}
