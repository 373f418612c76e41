//! Fixed-size subset enumeration.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Returns every size-`k` subset of `items`.
///
/// Subsets are taken by position, so equal items at different positions
/// still yield distinct subsets. Within a subset the items keep their
/// original order. `k == 0` and `k > items.len()` yield no subsets.
///
/// The result has C(n, k) entries; only pass small, pre-filtered pools.
///
/// ```
/// use tienlen::combinations::combinations;
///
/// let subsets = combinations(&['a', 'b', 'c'], 2);
/// assert_eq!(subsets, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
/// ```
#[must_use]
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 || k > items.len() {
        return Vec::new();
    }
    if k == 1 {
        return items.iter().map(|item| vec![item.clone()]).collect();
    }

    let mut subsets = Vec::new();
    for (i, head) in items.iter().enumerate() {
        for tail in combinations(&items[i + 1..], k - 1) {
            let mut subset = Vec::with_capacity(k);
            subset.push(head.clone());
            subset.extend(tail);
            subsets.push(subset);
        }
    }
    subsets
}
