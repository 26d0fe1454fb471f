//! Tests for the flat-index cell membership set

#[cfg(test)]
mod tests {
    use tilefold::board::cells::CellSet;

    // Tests insertion, membership, and counting
    // Verified by dropping inserted indices
    #[test]
    fn test_insert_and_contains() {
        let mut set = CellSet::new(16);
        set.insert(0);
        set.insert(7);
        set.insert(15);

        assert!(set.contains(0));
        assert!(set.contains(7));
        assert!(set.contains(15));
        assert!(!set.contains(1));
        assert_eq!(set.count(), 3);
        assert!(!set.is_empty());
    }

    // Tests that out-of-capacity indices are ignored
    // Verified by growing the set on demand
    #[test]
    fn test_insert_beyond_capacity_is_ignored() {
        let mut set = CellSet::new(4);
        set.insert(4);
        set.insert(100);

        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert!(!set.contains(4));
    }

    // Tests rank-based selection in ascending index order
    // Verified by selecting in insertion order
    #[test]
    fn test_nth_selects_in_index_order() {
        let mut set = CellSet::new(10);
        set.insert(9);
        set.insert(2);
        set.insert(5);

        assert_eq!(set.nth(0), Some(2));
        assert_eq!(set.nth(1), Some(5));
        assert_eq!(set.nth(2), Some(9));
        assert_eq!(set.nth(3), None);
    }

    // Tests vector extraction and display formatting
    // Verified by omitting the count from the rendering
    #[test]
    fn test_to_vec_and_display() {
        let mut set = CellSet::new(6);
        set.insert(1);
        set.insert(4);

        assert_eq!(set.to_vec(), vec![1, 4]);
        assert_eq!(set.to_string(), "CellSet(2 cells: [1, 4])");
    }

    // Tests the empty set
    // Verified by treating capacity as membership
    #[test]
    fn test_empty_set_has_no_members() {
        let set = CellSet::new(8);

        assert!(set.is_empty());
        assert_eq!(set.nth(0), None);
        assert_eq!(set.to_vec(), Vec::<usize>::new());
    }
}
