//! `reverse`: walk a bidirectional view from back to front
//!
//! A reverse cursor wraps the source cursor one past the element it
//! denotes, so the reversed begin is built from the source end and the
//! reversed end from the source begin. Any bidirectional view can be
//! reversed, including filtered, transformed or already reversed ones.

use std::fmt;

use super::Adaptor;
use crate::cursor::{BidirectionalCursor, Cursor, ForwardCursor, Traversal};
use crate::view::View;

/// Adaptor token built by [`reverse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse;

/// Yield the source elements last to first.
///
/// The source must be able to step backward. Forward-only sources, such as
/// a `BTreeSet` walked through its iterator, are rejected at compile time:
///
/// ```compile_fail
/// use std::collections::BTreeSet;
/// use rangepipe::reverse;
/// let set: BTreeSet<i32> = (0..5).collect();
/// let _ = &set | reverse();
/// ```
pub fn reverse() -> Reverse {
    Reverse
}

impl<C: BidirectionalCursor> Adaptor<C> for Reverse {
    type Output = ReverseCursor<C>;

    fn apply(self, source: View<C>) -> View<ReverseCursor<C>> {
        let (first, last) = source.into_parts();
        View::new(ReverseCursor::new(last), ReverseCursor::new(first))
    }
}

/// Cursor produced by [`reverse`].
pub struct ReverseCursor<C> {
    base: C,
    // `base` stepped back once; kept so repeated reads do not retreat again.
    ahead: Option<C>,
}

impl<C> ReverseCursor<C> {
    fn new(base: C) -> Self {
        Self { base, ahead: None }
    }

    /// Source cursor one past the element this cursor denotes.
    pub fn base(&self) -> &C {
        &self.base
    }
}

impl<C: Clone> Clone for ReverseCursor<C> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            ahead: self.ahead.clone(),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for ReverseCursor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseCursor")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<C: BidirectionalCursor> Cursor for ReverseCursor<C> {
    type Item = C::Item;
    const TRAVERSAL: Traversal = C::TRAVERSAL.cap(Traversal::Bidirectional);

    fn current(&mut self) -> C::Item {
        let base = &self.base;
        self.ahead
            .get_or_insert_with(|| {
                let mut before = base.clone();
                before.retreat();
                before
            })
            .current()
    }

    fn advance(&mut self) {
        match self.ahead.take() {
            Some(before) => self.base = before,
            None => self.base.retreat(),
        }
    }

    fn same_position(&self, other: &Self) -> bool {
        self.base.same_position(&other.base)
    }

    fn settle(&mut self) {
        self.base.settle();
        if let Some(before) = &mut self.ahead {
            before.settle();
        }
    }
}

impl<C: BidirectionalCursor> ForwardCursor for ReverseCursor<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for ReverseCursor<C> {
    fn retreat(&mut self) {
        self.base.advance();
        self.ahead = None;
    }
}

position_eq!([C] ReverseCursor<C>);

#[cfg(test)]
mod tests {
    use crate::cursor::{BidirectionalCursor, Cursor, Traversal};
    use crate::{filter, reverse, transform, view};

    #[test]
    fn test_reverse_empty_and_single() {
        let empty: [u8; 0] = [];
        assert!((&empty | reverse()).is_empty());

        let single = [42];
        let once: Vec<i32> = (&single | reverse()).into_iter().copied().collect();
        assert_eq!(once, vec![42]);
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let digits: Vec<u32> = (0..10).collect();
        let backward: Vec<u32> = (&digits | reverse()).into_iter().copied().collect();
        assert_eq!(backward, vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        let round_trip: Vec<u32> = (&digits | reverse() | reverse())
            .into_iter()
            .copied()
            .collect();
        assert_eq!(round_trip, digits);
    }

    #[test]
    fn test_reverse_of_filtered_view() {
        let digits: Vec<u32> = (0..10).collect();
        let odds_down: Vec<u32> = (&digits | filter(|x: &&u32| **x % 2 == 1) | reverse())
            .into_iter()
            .copied()
            .collect();
        assert_eq!(odds_down, vec![9, 7, 5, 3, 1]);
    }

    #[test]
    fn test_reverse_cursor_steps_both_ways() {
        let data = [1, 2, 3];
        let tripled = view(&data) | transform(|x: &i32| x * 3) | reverse();
        assert_eq!(tripled.traversal(), Traversal::Bidirectional);

        let mut cursor = tripled.begin();
        assert_eq!(cursor.current(), 9);
        cursor.advance();
        assert_eq!(cursor.current(), 6);
        cursor.retreat();
        assert_eq!(cursor.current(), 9);
        assert!(cursor == tripled.begin());
    }
}
