//! `take`: the first `n` elements of a source
//!
//! A take cursor counts the elements it has stepped over. Two take cursors
//! are equal when their counts match *or* their source positions match: the
//! count bounds an infinite `generate` source, the source position ends the
//! view early when the source is shorter than `n`.
//!
//! The result is at most forward, whatever the source offers.

use super::Adaptor;
use crate::cursor::{Cursor, ForwardCursor, Traversal};
use crate::view::View;

/// Adaptor token built by [`take`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take {
    count: usize,
}

/// Yield at most the first `count` elements.
///
/// Stepping backward through a taken view is not offered:
///
/// ```compile_fail
/// use rangepipe::{reverse, take};
/// let data = vec![1, 2, 3, 4, 5];
/// let _ = &data | take(3) | reverse();
/// ```
pub fn take(count: usize) -> Take {
    Take { count }
}

impl<C: Cursor> Adaptor<C> for Take {
    type Output = TakeCursor<C>;

    fn apply(self, source: View<C>) -> View<TakeCursor<C>> {
        let (first, last) = source.into_parts();
        View::new(
            TakeCursor {
                base: first,
                taken: 0,
                limit: self.count,
            },
            TakeCursor {
                base: last,
                taken: self.count,
                limit: self.count,
            },
        )
    }
}

/// Cursor produced by [`take`].
#[derive(Debug, Clone)]
pub struct TakeCursor<C> {
    base: C,
    taken: usize,
    limit: usize,
}

impl<C> TakeCursor<C> {
    /// Elements stepped over so far.
    pub fn taken(&self) -> usize {
        self.taken
    }

    /// Elements left before the count runs out.
    pub fn remaining(&self) -> usize {
        self.limit - self.taken
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;
    const TRAVERSAL: Traversal = C::TRAVERSAL.cap(Traversal::Forward);

    fn current(&mut self) -> C::Item {
        debug_assert!(self.taken < self.limit, "dereferenced the end of a take view");
        self.base.current()
    }

    fn advance(&mut self) {
        debug_assert!(self.taken < self.limit, "advanced past the end of a take view");
        self.base.advance();
        self.taken += 1;
    }

    fn same_position(&self, other: &Self) -> bool {
        self.taken == other.taken || self.base.same_position(&other.base)
    }

    fn settle(&mut self) {
        self.base.settle();
    }
}

impl<C: ForwardCursor> ForwardCursor for TakeCursor<C> {}

position_eq!([C] TakeCursor<C>);

#[cfg(test)]
mod tests {
    use crate::cursor::Traversal;
    use crate::{generate, input, take, transform, view};

    #[test]
    fn test_take_zero_is_empty() {
        let data = [1, 2, 3];
        let none = &data | take(0);
        assert!(none.is_empty());
        assert_eq!(none.iter().next(), None);
    }

    #[test]
    fn test_take_stops_at_short_source() {
        let data = vec![1, 2, 3];
        let all: Vec<i32> = (&data | take(10)).into_iter().copied().collect();
        assert_eq!(all, data);
    }

    #[test]
    fn test_take_bounds_infinite_generator() {
        let mut next = 0;
        let counter = generate(move || {
            next += 1;
            next - 1
        });
        let first: Vec<i32> = (counter | take(5)).into_iter().collect();
        assert_eq!(first, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_take_caps_traversal_at_forward() {
        let data = [1, 2, 3];
        assert_eq!((&data | take(2)).traversal(), Traversal::Forward);
        let doubled = view(&data) | transform(|x: &i32| x * 2) | take(2);
        assert_eq!(doubled.traversal(), Traversal::Forward);
        assert_eq!((input(data) | take(2)).traversal(), Traversal::SinglePass);
    }

    #[test]
    fn test_take_over_endless_input_stream() {
        let mut pulled = 0;
        let source = std::iter::from_fn(|| {
            pulled += 1;
            Some(pulled)
        });
        let first: Vec<i32> = (input(source) | take(3)).into_iter().collect();
        assert_eq!(first, vec![1, 2, 3]);
    }
}
