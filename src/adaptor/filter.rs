//! `filter`: keep the elements a predicate accepts
//!
//! A filter cursor always rests on an accepted element or on the end of its
//! source. Moving skips rejected elements: forward until a match or the
//! source end, backward until a match or the source begin. Random access is
//! lost because a skip-scan has no O(1) offset.

use std::fmt;
use std::rc::Rc;

use super::Adaptor;
use crate::cursor::{BidirectionalCursor, Cursor, ForwardCursor, Traversal};
use crate::view::View;

/// Adaptor token built by [`filter`].
#[derive(Debug, Clone, Copy)]
pub struct Filter<P> {
    predicate: P,
}

/// Keep only the elements for which `predicate` returns `true`.
///
/// The source must be at least forward: filtering re-reads elements while
/// scanning, so a single-pass input is rejected at compile time.
///
/// ```compile_fail
/// use rangepipe::{filter, input};
/// let lines = input(vec!["a", "", "b"]);
/// let _ = lines | filter(|s: &&str| !s.is_empty());
/// ```
///
/// A filtered view steps backward when its source can, but it offers no
/// random access:
///
/// ```compile_fail
/// use rangepipe::filter;
/// let data = vec![1, 2, 3, 4];
/// let evens = &data | filter(|x: &&i32| **x % 2 == 0);
/// let _ = evens.begin() + 1;
/// ```
pub fn filter<P>(predicate: P) -> Filter<P> {
    Filter { predicate }
}

impl<C, P> Adaptor<C> for Filter<P>
where
    C: ForwardCursor,
    P: Fn(&C::Item) -> bool,
{
    type Output = FilterCursor<C, P>;

    fn apply(self, source: View<C>) -> View<FilterCursor<C, P>> {
        let (first, last) = source.into_parts();
        let predicate = Rc::new(self.predicate);
        let begin = FilterCursor::new(
            first.clone(),
            first.clone(),
            last.clone(),
            Rc::clone(&predicate),
        );
        let end = FilterCursor::new(last.clone(), first, last, predicate);
        View::new(begin, end)
    }
}

/// Cursor produced by [`filter`].
///
/// Keeps the source bounds so backward scans stop at the source begin. The
/// initial skip past rejected leading elements is deferred to
/// [`Cursor::settle`].
pub struct FilterCursor<C, P> {
    base: C,
    first: C,
    last: C,
    predicate: Rc<P>,
    settled: bool,
}

impl<C, P> FilterCursor<C, P>
where
    C: ForwardCursor,
    P: Fn(&C::Item) -> bool,
{
    fn new(base: C, first: C, last: C, predicate: Rc<P>) -> Self {
        Self {
            base,
            first,
            last,
            predicate,
            settled: false,
        }
    }

    fn accepts_current(&mut self) -> bool {
        let item = self.base.current();
        (self.predicate)(&item)
    }

    fn skip_forward(&mut self) {
        while !self.base.same_position(&self.last) && !self.accepts_current() {
            self.base.advance();
        }
    }

    /// Underlying source cursor.
    pub fn base(&self) -> &C {
        &self.base
    }
}

impl<C, P> FilterCursor<C, P>
where
    C: BidirectionalCursor,
    P: Fn(&C::Item) -> bool,
{
    fn skip_backward(&mut self) {
        while !self.base.same_position(&self.first) && !self.accepts_current() {
            self.base.retreat();
        }
    }
}

impl<C: Clone, P> Clone for FilterCursor<C, P> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            first: self.first.clone(),
            last: self.last.clone(),
            predicate: Rc::clone(&self.predicate),
            settled: self.settled,
        }
    }
}

impl<C: fmt::Debug, P> fmt::Debug for FilterCursor<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCursor")
            .field("base", &self.base)
            .field("settled", &self.settled)
            .finish_non_exhaustive()
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: ForwardCursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;
    const TRAVERSAL: Traversal = C::TRAVERSAL.cap(Traversal::Bidirectional);

    fn current(&mut self) -> C::Item {
        self.settle();
        self.base.current()
    }

    fn advance(&mut self) {
        self.settle();
        self.base.advance();
        self.skip_forward();
    }

    fn same_position(&self, other: &Self) -> bool {
        debug_assert!(
            self.settled && other.settled,
            "compared filter cursors before settling them"
        );
        self.base.same_position(&other.base)
    }

    fn settle(&mut self) {
        if self.settled {
            return;
        }
        self.first.settle();
        self.last.settle();
        self.base.settle();
        self.skip_forward();
        self.settled = true;
    }
}

impl<C, P> ForwardCursor for FilterCursor<C, P>
where
    C: ForwardCursor,
    P: Fn(&C::Item) -> bool,
{
}

impl<C, P> BidirectionalCursor for FilterCursor<C, P>
where
    C: BidirectionalCursor,
    P: Fn(&C::Item) -> bool,
{
    fn retreat(&mut self) {
        self.settle();
        self.base.retreat();
        self.skip_backward();
    }
}

position_eq!([C, P] FilterCursor<C, P>);

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::cursor::{BidirectionalCursor, Cursor, Traversal};
    use crate::{filter, view};

    fn is_even(x: &&u32) -> bool {
        **x % 2 == 0
    }

    #[test]
    fn test_filter_keeps_matches_in_order() {
        let data = vec![1u32, 2, 3, 6, 9, 12, 13];
        let evens: Vec<u32> = (&data | filter(is_even)).into_iter().copied().collect();
        assert_eq!(evens, vec![2, 6, 12]);
    }

    #[test]
    fn test_filter_begin_skips_leading_rejects() {
        let data = vec![2u32, 1, 3, 5, 7];
        let odds = &data | filter(|x: &&u32| **x % 2 == 1);
        let mut start = odds.begin();
        assert_eq!(*start.current(), 1);
        assert_eq!(odds.count(), 4);
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        let data = vec![1u32, 3, 5, 7];
        let evens = &data | filter(is_even);
        assert!(evens.is_empty());
        assert_eq!(evens.count(), 0);
    }

    #[test]
    fn test_filter_retreats_over_rejects() {
        let data = vec![1u32, 2, 3, 6, 9, 12, 13];
        let evens = &data | filter(is_even);
        let mut cursor = evens.end();
        cursor.retreat();
        assert_eq!(*cursor.current(), 12);
        cursor.retreat();
        assert_eq!(*cursor.current(), 6);
        cursor.retreat();
        assert_eq!(*cursor.current(), 2);
        assert!(cursor == evens.begin());
    }

    #[test]
    fn test_filter_is_lazy_until_iterated() {
        let calls = Cell::new(0);
        let data = [1u32, 2, 3, 4];
        let evens = view(&data) | filter(|x: &&u32| {
            calls.set(calls.get() + 1);
            **x % 2 == 0
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(evens.iter().count(), 2);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_filter_downgrades_random_access() {
        let data = [1u32, 2];
        assert_eq!((&data | filter(is_even)).traversal(), Traversal::Bidirectional);
        assert_eq!(("ab" | filter(|c: &char| *c == 'a')).traversal(), Traversal::Forward);
    }
}
