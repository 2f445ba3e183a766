//! Views: lazy `(begin, end)` pairs of cursors
//!
//! A view is the result of every adaptor and the thing `|` consumes. It does
//! no work on its own; elements are produced only while it is iterated.

use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::cursor::{
    BidirectionalCursor, Cursor, DequeCursor, ForwardCursor, InputCursor, IterCursor,
    RandomAccessCursor, SharedCursor, SliceCursor, Traversal,
};
use crate::RangeError;

/// A lazy sequence delimited by two cursors of the same type.
#[derive(Debug, Clone, Default)]
pub struct View<C> {
    begin: C,
    end: C,
}

impl<C: Cursor> View<C> {
    /// View over `[begin, end)`.
    pub fn new(begin: C, end: C) -> Self {
        Self { begin, end }
    }

    /// Split into the raw `(begin, end)` cursors without settling them.
    pub fn into_parts(self) -> (C, C) {
        (self.begin, self.end)
    }

    /// Capability of the cursors this view hands out.
    pub fn traversal(&self) -> Traversal {
        C::TRAVERSAL
    }

    /// Apply an adaptor; `view.pipe(a)` is the method form of `view | a`.
    pub fn pipe<A>(self, adaptor: A) -> View<A::Output>
    where
        A: crate::adaptor::Adaptor<C>,
    {
        adaptor.apply(self)
    }
}

impl<C: ForwardCursor> View<C> {
    /// Cursor at the first element.
    pub fn begin(&self) -> C {
        let mut begin = self.begin.clone();
        begin.settle();
        begin
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> C {
        let mut end = self.end.clone();
        end.settle();
        end
    }

    /// Whether the view produces no elements.
    pub fn is_empty(&self) -> bool {
        self.begin().same_position(&self.end())
    }

    /// Iterate without consuming the view.
    pub fn iter(&self) -> Iter<C> {
        Iter::new(self.begin.clone(), self.end.clone())
    }

    /// Number of elements, found by stepping through the view.
    ///
    /// Never returns for an unbounded `generate` view.
    pub fn count(&self) -> usize {
        let (mut cursor, end) = (self.begin(), self.end());
        let mut steps = 0;
        while !cursor.same_position(&end) {
            cursor.advance();
            steps += 1;
        }
        steps
    }
}

impl<C: RandomAccessCursor> View<C> {
    /// Number of elements, in constant time.
    pub fn len(&self) -> usize {
        self.end().distance_from(&self.begin()).max(0) as usize
    }

    /// Element at `index`, computed fresh.
    pub fn get(&self, index: usize) -> Result<C::Item, RangeError> {
        let len = self.len();
        if index >= len {
            return Err(RangeError::OutOfBounds { index, len });
        }
        Ok(self.begin().at(index as isize))
    }
}

/// Views compare by their first positions.
impl<C: ForwardCursor> PartialEq for View<C> {
    fn eq(&self, other: &Self) -> bool {
        self.begin().same_position(&other.begin())
    }
}

/// Iterator draining a view from the front (and from the back when the
/// cursors are bidirectional).
#[derive(Debug, Clone)]
pub struct Iter<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Iter<C> {
    fn new(mut front: C, mut back: C) -> Self {
        front.settle();
        back.settle();
        Self { front, back }
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.front.same_position(&self.back) {
            return None;
        }
        let item = self.front.current();
        self.front.advance();
        Some(item)
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Iter<C> {
    fn next_back(&mut self) -> Option<C::Item> {
        if self.front.same_position(&self.back) {
            return None;
        }
        self.back.retreat();
        Some(self.back.current())
    }
}

impl<C: Cursor> FusedIterator for Iter<C> {}

impl<C: Cursor> IntoIterator for View<C> {
    type Item = C::Item;
    type IntoIter = Iter<C>;

    fn into_iter(self) -> Iter<C> {
        Iter::new(self.begin, self.end)
    }
}

impl<'v, C: ForwardCursor> IntoIterator for &'v View<C> {
    type Item = C::Item;
    type IntoIter = Iter<C>;

    fn into_iter(self) -> Iter<C> {
        self.iter()
    }
}

/// Anything that can act as the left-hand side of `|`.
pub trait IntoView {
    /// Cursor type of the resulting view.
    type Cursor: Cursor;

    /// Convert into a view.
    fn into_view(self) -> View<Self::Cursor>;
}

impl<C: Cursor> IntoView for View<C> {
    type Cursor = C;

    fn into_view(self) -> View<C> {
        self
    }
}

impl<C: ForwardCursor> IntoView for &View<C> {
    type Cursor = C;

    fn into_view(self) -> View<C> {
        self.clone()
    }
}

impl<'a, T> IntoView for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn into_view(self) -> View<Self::Cursor> {
        View::new(SliceCursor::new(self, 0), SliceCursor::new(self, self.len()))
    }
}

impl<'a, T, const N: usize> IntoView for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn into_view(self) -> View<Self::Cursor> {
        self.as_slice().into_view()
    }
}

impl<'a, T> IntoView for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn into_view(self) -> View<Self::Cursor> {
        self.as_slice().into_view()
    }
}

impl<'a, T> IntoView for &'a VecDeque<T> {
    type Cursor = DequeCursor<'a, T>;

    fn into_view(self) -> View<Self::Cursor> {
        View::new(DequeCursor::new(self, 0), DequeCursor::new(self, self.len()))
    }
}

impl<'a, T> IntoView for &'a LinkedList<T> {
    type Cursor = IterCursor<std::collections::linked_list::Iter<'a, T>>;

    fn into_view(self) -> View<Self::Cursor> {
        iterate(self.iter())
    }
}

impl<'a, T> IntoView for &'a BTreeSet<T> {
    type Cursor = IterCursor<std::collections::btree_set::Iter<'a, T>>;

    fn into_view(self) -> View<Self::Cursor> {
        iterate(self.iter())
    }
}

impl<'a> IntoView for &'a str {
    type Cursor = IterCursor<std::str::Chars<'a>>;

    fn into_view(self) -> View<Self::Cursor> {
        iterate(self.chars())
    }
}

impl<'a> IntoView for &'a String {
    type Cursor = IterCursor<std::str::Chars<'a>>;

    fn into_view(self) -> View<Self::Cursor> {
        self.as_str().into_view()
    }
}

/// Owned vectors are moved into shared storage, so a temporary on the left
/// of `|` lives as long as the view built from it.
impl<T: Clone> IntoView for Vec<T> {
    type Cursor = SharedCursor<T>;

    fn into_view(self) -> View<Self::Cursor> {
        let data: Rc<[T]> = Rc::from(self);
        let len = data.len();
        View::new(
            SharedCursor::new(Rc::clone(&data), 0),
            SharedCursor::new(data, len),
        )
    }
}

/// View over any supported source.
pub fn view<S: IntoView>(source: S) -> View<S::Cursor> {
    source.into_view()
}

/// Forward view over a cloneable iterator, which may be endless.
pub fn iterate<I>(iter: I) -> View<IterCursor<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Clone,
{
    View::new(IterCursor::begin(iter.into_iter()), IterCursor::end())
}

/// Single-pass view over any iterator. The first element is read
/// immediately.
pub fn input<I>(iter: I) -> View<InputCursor<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    View::new(InputCursor::begin(iter.into_iter()), InputCursor::end())
}
