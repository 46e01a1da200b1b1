//! Utility functions for sorting operations

/// Reorder items in-place based on the given indices
///
/// Each index in `indices` tells us which element from the original slice
/// should be at that position. `indices` must be a permutation of
/// `0..items.len()`. Elements are moved by swapping along the permutation's
/// cycles, so nothing is cloned.
pub fn reorder_by_indices<T>(items: &mut [T], indices: &[usize]) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let mut placed = vec![false; items.len()];
    for start in 0..items.len() {
        if placed[start] {
            continue;
        }

        let mut current = start;
        loop {
            placed[current] = true;
            let source = indices[current];
            if source == start {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_by_indices() {
        let mut items = vec!["a", "b", "c", "d"];
        let indices = vec![3, 1, 0, 2]; // d, b, a, c

        reorder_by_indices(&mut items, &indices);

        assert_eq!(items, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_reorder_reverse_and_identity() {
        let mut items = vec![1, 2, 3, 4, 5];
        reorder_by_indices(&mut items, &[4, 3, 2, 1, 0]);
        assert_eq!(items, vec![5, 4, 3, 2, 1]);

        reorder_by_indices(&mut items, &[0, 1, 2, 3, 4]);
        assert_eq!(items, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reorder_empty() {
        let mut items: Vec<u8> = Vec::new();
        reorder_by_indices(&mut items, &[]);
        assert!(items.is_empty());
    }
}
