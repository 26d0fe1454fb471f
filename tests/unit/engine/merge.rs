//! Tests for the pure slide and merge line transforms

#[cfg(test)]
mod tests {
    use tilefold::engine::merge::{merge, slide};

    // Tests compaction of non-zero values to the front
    // Verified by dropping the zero padding
    #[test]
    fn test_slide_moves_non_zeros_to_the_front() {
        assert_eq!(slide(&[0, 2, 0, 4]), vec![2, 4, 0, 0]);
        assert_eq!(slide(&[0, 0, 0, 2]), vec![2, 0, 0, 0]);
        assert_eq!(slide(&[2, 4, 2, 4]), vec![2, 4, 2, 4]);
        assert_eq!(slide(&[0, 0, 0, 0]), vec![0, 0, 0, 0]);
    }

    // Tests slide preserves the relative order of surviving values
    // Verified by compacting toward the tail
    #[test]
    fn test_slide_preserves_relative_order() {
        assert_eq!(slide(&[0, 8, 0, 2, 4]), vec![8, 2, 4, 0, 0]);
    }

    // Tests the reference merge lines
    // Verified by merging before compaction
    #[test]
    fn test_merge_reference_lines() {
        assert_eq!(merge(&[2, 0, 2, 0]), vec![4, 0, 0, 0]);
        assert_eq!(merge(&[2, 2, 2, 2]), vec![4, 4, 0, 0]);
        assert_eq!(merge(&[2, 2, 4, 4]), vec![4, 8, 0, 0]);
        assert_eq!(merge(&[4, 0, 0, 4]), vec![8, 0, 0, 0]);
        assert_eq!(merge(&[0, 0, 0, 0]), vec![0, 0, 0, 0]);
    }

    // Tests a freshly doubled value never merges again in the same pass
    // Verified by re-scanning after each pair replacement
    #[test]
    fn test_merge_joins_each_tile_at_most_once() {
        assert_eq!(merge(&[2, 2, 4]), vec![4, 4, 0]);
        assert_eq!(merge(&[4, 4, 8, 0]), vec![8, 8, 0, 0]);
        assert_eq!(merge(&[2, 2, 2]), vec![4, 2, 0]);
    }

    // Tests the unpaired last element is carried through unchanged
    // Verified by dropping the final element
    #[test]
    fn test_merge_carries_the_unpaired_tail() {
        assert_eq!(merge(&[2, 4, 8]), vec![2, 4, 8]);
        assert_eq!(merge(&[4, 4, 2]), vec![8, 2, 0]);
    }

    // Tests idempotence of the full transform
    // Verified by leaving merged zeros uncompacted
    #[test]
    fn test_merge_is_idempotent() {
        let lines: [&[u32]; 4] = [
            &[2, 2, 2, 2],
            &[4, 0, 4, 8],
            &[2, 4, 2, 4],
            &[32, 32, 16, 16, 8, 8],
        ];

        for line in lines {
            let once = merge(line);
            assert_eq!(merge(&once), once);
        }
    }

    // Tests value conservation through both transforms
    // Verified by doubling without consuming the partner tile
    #[test]
    fn test_transforms_conserve_the_non_zero_sum() {
        let lines: [&[u32]; 4] = [
            &[2, 0, 2, 0],
            &[8, 8, 8, 8],
            &[0, 2, 4, 2],
            &[64, 64, 0, 2],
        ];

        for line in lines {
            let total: u32 = line.iter().sum();
            assert_eq!(slide(line).iter().sum::<u32>(), total);
            assert_eq!(merge(line).iter().sum::<u32>(), total);
        }
    }

    // Tests the degenerate empty line
    // Verified by padding to a fixed length
    #[test]
    fn test_empty_line_is_a_no_op() {
        assert_eq!(slide(&[]), Vec::<u32>::new());
        assert_eq!(merge(&[]), Vec::<u32>::new());
    }
}
