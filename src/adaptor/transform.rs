//! `transform`: map every element through a function
//!
//! The cursor keeps the capability of its source, up to random access.
//! Each position's mapped value is memoized, so a downstream filter that
//! reads an element several times before moving calls the function once.
//! `RandomAccessCursor::at` does not touch the memo and maps afresh.

use std::fmt;
use std::rc::Rc;

use super::Adaptor;
use crate::cursor::{
    BidirectionalCursor, Cached, Cursor, ForwardCursor, RandomAccessCursor, Traversal,
};
use crate::view::View;

/// Adaptor token built by [`transform`].
#[derive(Debug, Clone, Copy)]
pub struct Transform<F> {
    map: F,
}

/// Yield `map(element)` for every element of the source.
pub fn transform<F>(map: F) -> Transform<F> {
    Transform { map }
}

impl<C, F, U> Adaptor<C> for Transform<F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
    U: Clone,
{
    type Output = TransformCursor<C, F, U>;

    fn apply(self, source: View<C>) -> View<TransformCursor<C, F, U>> {
        let (first, last) = source.into_parts();
        let map = Rc::new(self.map);
        View::new(
            TransformCursor::new(first, Rc::clone(&map)),
            TransformCursor::new(last, map),
        )
    }
}

/// Cursor produced by [`transform`].
pub struct TransformCursor<C, F, U> {
    base: C,
    map: Rc<F>,
    cache: Cached<U>,
}

impl<C, F, U> TransformCursor<C, F, U> {
    fn new(base: C, map: Rc<F>) -> Self {
        Self {
            base,
            map,
            cache: Cached::Empty,
        }
    }

    /// Underlying source cursor.
    pub fn base(&self) -> &C {
        &self.base
    }
}

impl<C: Clone, F, U: Clone> Clone for TransformCursor<C, F, U> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            map: Rc::clone(&self.map),
            cache: self.cache.clone(),
        }
    }
}

impl<C: fmt::Debug, F, U> fmt::Debug for TransformCursor<C, F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformCursor")
            .field("base", &self.base)
            .field("cached", &self.cache.is_filled())
            .finish_non_exhaustive()
    }
}

impl<C, F, U> Cursor for TransformCursor<C, F, U>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
    U: Clone,
{
    type Item = U;
    const TRAVERSAL: Traversal = C::TRAVERSAL;

    fn current(&mut self) -> U {
        let (base, map) = (&mut self.base, &self.map);
        self.cache.get_or_compute(|| map(base.current()))
    }

    fn advance(&mut self) {
        self.base.advance();
        self.cache.invalidate();
    }

    fn same_position(&self, other: &Self) -> bool {
        self.base.same_position(&other.base)
    }

    fn settle(&mut self) {
        self.base.settle();
    }
}

impl<C, F, U> ForwardCursor for TransformCursor<C, F, U>
where
    C: ForwardCursor,
    F: Fn(C::Item) -> U,
    U: Clone,
{
}

impl<C, F, U> BidirectionalCursor for TransformCursor<C, F, U>
where
    C: BidirectionalCursor,
    F: Fn(C::Item) -> U,
    U: Clone,
{
    fn retreat(&mut self) {
        self.base.retreat();
        self.cache.invalidate();
    }
}

impl<C, F, U> RandomAccessCursor for TransformCursor<C, F, U>
where
    C: RandomAccessCursor,
    F: Fn(C::Item) -> U,
    U: Clone,
{
    fn jump(&mut self, n: isize) {
        self.base.jump(n);
        self.cache.invalidate();
    }

    fn distance_from(&self, origin: &Self) -> isize {
        self.base.distance_from(&origin.base)
    }

    fn at(&self, n: isize) -> U {
        (self.map)(self.base.at(n))
    }
}

position_eq!([C, F, U] TransformCursor<C, F, U>);
random_access_ops!([C, F, U] TransformCursor<C, F, U>);

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, Traversal};
    use crate::{filter, transform};

    #[test]
    fn test_transform_random_access_arithmetic() {
        let words = vec!["1", "2", "3", "6", "9", "12", "13"];
        let numbers = &words | transform(|s: &&str| s.parse::<u32>().unwrap_or_default());
        assert_eq!(numbers.traversal(), Traversal::RandomAccess);

        let start = numbers.begin();
        let end = numbers.end();
        assert!(start < end);
        assert!(start <= start.clone());
        assert_eq!(end.clone() - start.clone(), 7);

        let mut next = 1isize + start.clone();
        assert_eq!(next.current(), 2);
        let mut prev = end.clone() - 1isize;
        assert_eq!(prev.current(), 13);
        assert_eq!(start.at(3), 6);

        let mut moved = start.clone();
        moved += 2;
        assert_eq!(moved.current(), 3);
        let mut back = end;
        back -= 2;
        assert_eq!(back.current(), 12);
    }

    #[test]
    fn test_transform_memoizes_current_value() {
        let calls = Cell::new(0);
        let data = [1u32, 2, 3];
        let squares = &data | transform(|x: &u32| {
            calls.set(calls.get() + 1);
            x * x
        });

        let mut cursor = squares.begin();
        assert_eq!(calls.get(), 0);
        assert_eq!(cursor.current(), 1);
        assert_eq!(cursor.current(), 1);
        assert_eq!(calls.get(), 1);

        cursor.advance();
        assert_eq!(cursor.current(), 4);
        assert_eq!(calls.get(), 2);

        cursor.retreat();
        assert_eq!(cursor.current(), 1);
        assert_eq!(calls.get(), 3);

        let _ = cursor.at(2);
        let _ = cursor.at(2);
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_filter_over_transform_maps_once_per_position() {
        let calls = Cell::new(0);
        let data = [2u32, 3, 4, 6];
        let doubled_evens = &data
            | transform(|x: &u32| {
                calls.set(calls.get() + 1);
                x * 2
            })
            | filter(|x: &u32| x % 4 == 0);

        let collected: Vec<u32> = doubled_evens.into_iter().collect();
        assert_eq!(collected, vec![4, 8, 12]);
        assert_eq!(calls.get(), data.len());
    }
}
