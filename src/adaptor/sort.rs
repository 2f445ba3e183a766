//! `sort`: the one eager adaptor
//!
//! Applying `sort()` drains the source into a vector, sorts it and hands
//! back a random-access view over the owned result. The source must be
//! finite.

use tracing::debug;

use super::Adaptor;
use crate::cursor::{Cursor, SharedCursor};
use crate::view::{view, View};

/// Adaptor token built by [`sort`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort;

/// Collect the source and yield its elements in ascending order.
///
/// The sort is stable. Applying it to an unbounded `generate` view never
/// returns.
pub fn sort() -> Sort {
    Sort
}

impl<C> Adaptor<C> for Sort
where
    C: Cursor,
    C::Item: Ord + Clone,
{
    type Output = SharedCursor<C::Item>;

    fn apply(self, source: View<C>) -> View<SharedCursor<C::Item>> {
        let mut items: Vec<C::Item> = source.into_iter().collect();
        items.sort();
        debug!(elements = items.len(), "sorted view materialized");
        view(items)
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::Traversal;
    use crate::{filter, input, reverse, sort, take};

    #[test]
    fn test_sort_orders_elements() {
        let data = vec![5, 3, 9, 1, 3];
        let sorted = &data | sort();
        assert_eq!(sorted.traversal(), Traversal::RandomAccess);
        assert_eq!(sorted.len(), 5);
        let collected: Vec<i32> = sorted.into_iter().copied().collect();
        assert_eq!(collected, vec![1, 3, 3, 5, 9]);
    }

    #[test]
    fn test_sort_restores_capability_after_take() {
        let data = vec![4, 8, 1, 7, 2];
        let largest_first: Vec<i32> = (&data | take(4) | sort() | reverse())
            .into_iter()
            .copied()
            .collect();
        assert_eq!(largest_first, vec![8, 7, 4, 1]);
    }

    #[test]
    fn test_sort_accepts_single_pass_input() {
        let words = input("pear apple fig".split(' '));
        let sorted = words | sort() | filter(|w: &&str| w.len() > 3);
        let collected: Vec<&str> = sorted.into_iter().collect();
        assert_eq!(collected, vec!["apple", "pear"]);
    }
}
