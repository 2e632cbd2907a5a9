//! Subset enumeration for candidate team splits

/// Produce every combination of exactly `size` elements from `items`.
///
/// Each combination preserves the relative order of `items`. Enumeration is
/// lexicographic by index: at every position the include branch is explored
/// before the skip branch, so the output order is stable for a given input
/// order. The input is never mutated and every returned container is freshly
/// allocated.
///
/// `size == 0` yields a single empty combination; `size` larger than
/// `items.len()` yields none.
pub fn combinations<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(size);
    collect_combinations(items, size, 0, &mut current, &mut result);
    result
}

fn collect_combinations<T: Clone>(
    items: &[T],
    size: usize,
    start: usize,
    current: &mut Vec<T>,
    result: &mut Vec<Vec<T>>,
) {
    if current.len() == size {
        result.push(current.clone());
        return;
    }
    if start >= items.len() {
        return;
    }

    current.push(items[start].clone());
    collect_combinations(items, size, start + 1, current, result);
    current.pop();
    collect_combinations(items, size, start + 1, current, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn binomial(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        let mut result = 1usize;
        for i in 0..k {
            result = result * (n - i) / (i + 1);
        }
        result
    }

    #[test]
    fn test_four_of_nine_yields_126() {
        let items: Vec<u32> = (1..=9).collect();
        assert_eq!(combinations(&items, 4).len(), 126);
    }

    #[test]
    fn test_size_zero_yields_single_empty() {
        let items = [1, 2, 3];
        let result = combinations(&items, 0);
        assert_eq!(result, vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_size_exceeding_length_yields_none() {
        let items = [1, 2, 3];
        assert!(combinations(&items, 4).is_empty());
    }

    #[test]
    fn test_enumeration_order_is_lexicographic() {
        let items = [1, 2, 3];
        let result = combinations(&items, 2);
        assert_eq!(result, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
    }

    #[test]
    fn test_full_size_returns_input_order() {
        let items = ["a", "b", "c"];
        assert_eq!(combinations(&items, 3), vec![vec!["a", "b", "c"]]);
    }

    proptest! {
        #[test]
        fn prop_cardinality_matches_binomial(n in 0usize..12, k in 0usize..12) {
            let items: Vec<usize> = (0..n).collect();
            prop_assert_eq!(combinations(&items, k).len(), binomial(n, k));
        }

        #[test]
        fn prop_combinations_preserve_relative_order(n in 1usize..10, k in 1usize..10) {
            let items: Vec<usize> = (0..n).collect();
            for combo in combinations(&items, k) {
                prop_assert!(combo.windows(2).all(|w| w[0] < w[1]));
            }
        }

        #[test]
        fn prop_combinations_are_distinct(n in 0usize..10, k in 0usize..10) {
            let items: Vec<usize> = (0..n).collect();
            let combos = combinations(&items, k);
            let unique: std::collections::HashSet<_> = combos.iter().cloned().collect();
            prop_assert_eq!(unique.len(), combos.len());
        }
    }
}
