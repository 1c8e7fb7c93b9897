//! Bounded top-N selection.
//!
//! Keeps at most `n` items in a min-heap while scanning the input once, so
//! picking the best 10 of 10,000 costs O(10,000 · log 10) instead of a full
//! sort. The same routine ranks movies and similar users.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry whose ordering is reversed on score, so the lowest score sits
/// at the top of the (max-)`BinaryHeap` and is the one evicted.
struct Lowest<T> {
    score: f64,
    item: T,
}

impl<T> PartialEq for Lowest<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Lowest<T> {}

impl<T> Ord for Lowest<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.score.total_cmp(&self.score)
    }
}

impl<T> PartialOrd for Lowest<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Return the `n` items with the largest `score`, highest first.
///
/// Scores are compared with [`f64::total_cmp`]. Among equal scores the order
/// is unspecified. Returns fewer than `n` items only when the input is
/// shorter than `n`.
pub fn top_n<T, I, F>(items: I, n: usize, score: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> f64,
{
    if n == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Lowest<T>> = BinaryHeap::new();
    for item in items {
        let score = score(&item);
        if heap.len() < n {
            heap.push(Lowest { score, item });
        } else if let Some(mut lowest) = heap.peek_mut() {
            if score.total_cmp(&lowest.score) == Ordering::Greater {
                // PeekMut restores the heap order when dropped
                *lowest = Lowest { score, item };
            }
        }
    }

    // Ascending in the reversed order is descending by score
    heap.into_sorted_vec()
        .into_iter()
        .map(|entry| entry.item)
        .collect()
}
