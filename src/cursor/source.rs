//! Cursors over concrete sequences.

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use super::{
    past_the_end, BidirectionalCursor, Cached, Cursor, ForwardCursor, RandomAccessCursor,
    Traversal,
};

fn offset(index: usize, n: isize) -> usize {
    let moved = index.wrapping_add_signed(n);
    debug_assert!(
        index.checked_add_signed(n).is_some(),
        "cursor moved before the start of its sequence"
    );
    moved
}

/// Random-access cursor over a borrowed slice; yields `&T`.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at `index` (`slice.len()` is the end position).
    pub fn new(slice: &'a [T], index: usize) -> Self {
        debug_assert!(index <= slice.len());
        Self { slice, index }
    }

    /// Offset from the start of the slice.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> Default for SliceCursor<'_, T> {
    fn default() -> Self {
        Self { slice: &[], index: 0 }
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;
    const TRAVERSAL: Traversal = Traversal::RandomAccess;

    fn current(&mut self) -> &'a T {
        match self.slice.get(self.index) {
            Some(item) => item,
            None => past_the_end("a slice"),
        }
    }

    fn advance(&mut self) {
        debug_assert!(self.index < self.slice.len(), "advanced past the end of a slice");
        self.index += 1;
    }

    fn same_position(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    fn retreat(&mut self) {
        self.index = offset(self.index, -1);
    }
}

impl<'a, T> RandomAccessCursor for SliceCursor<'a, T> {
    fn jump(&mut self, n: isize) {
        self.index = offset(self.index, n);
    }

    fn distance_from(&self, origin: &Self) -> isize {
        self.index as isize - origin.index as isize
    }

    fn at(&self, n: isize) -> &'a T {
        &self.slice[offset(self.index, n)]
    }
}

position_eq!(['a, T] SliceCursor<'a, T>);
random_access_ops!(['a, T] SliceCursor<'a, T>);

/// Random-access cursor over shared, owned storage; yields clones of `T`.
///
/// Piping an owned `Vec` moves it here, so the elements live as long as any
/// cursor does.
pub struct SharedCursor<T> {
    data: Rc<[T]>,
    index: usize,
}

impl<T> SharedCursor<T> {
    /// Cursor at `index` (`data.len()` is the end position).
    pub fn new(data: Rc<[T]>, index: usize) -> Self {
        debug_assert!(index <= data.len());
        Self { data, index }
    }
}

impl<T> Clone for SharedCursor<T> {
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
            index: self.index,
        }
    }
}

impl<T> Default for SharedCursor<T> {
    fn default() -> Self {
        Self {
            data: Rc::from(Vec::new()),
            index: 0,
        }
    }
}

impl<T> fmt::Debug for SharedCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCursor")
            .field("len", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

impl<T: Clone> Cursor for SharedCursor<T> {
    type Item = T;
    const TRAVERSAL: Traversal = Traversal::RandomAccess;

    fn current(&mut self) -> T {
        match self.data.get(self.index) {
            Some(item) => item.clone(),
            None => past_the_end("shared storage"),
        }
    }

    fn advance(&mut self) {
        debug_assert!(self.index < self.data.len(), "advanced past the end of shared storage");
        self.index += 1;
    }

    fn same_position(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T: Clone> ForwardCursor for SharedCursor<T> {}

impl<T: Clone> BidirectionalCursor for SharedCursor<T> {
    fn retreat(&mut self) {
        self.index = offset(self.index, -1);
    }
}

impl<T: Clone> RandomAccessCursor for SharedCursor<T> {
    fn jump(&mut self, n: isize) {
        self.index = offset(self.index, n);
    }

    fn distance_from(&self, origin: &Self) -> isize {
        self.index as isize - origin.index as isize
    }

    fn at(&self, n: isize) -> T {
        self.data[offset(self.index, n)].clone()
    }
}

position_eq!([T] SharedCursor<T>);
random_access_ops!([T] SharedCursor<T>);

/// Random-access cursor over a borrowed `VecDeque`; yields `&T`.
#[derive(Debug)]
pub struct DequeCursor<'a, T> {
    deque: &'a VecDeque<T>,
    index: usize,
}

impl<'a, T> DequeCursor<'a, T> {
    /// Cursor at `index` (`deque.len()` is the end position).
    pub fn new(deque: &'a VecDeque<T>, index: usize) -> Self {
        debug_assert!(index <= deque.len());
        Self { deque, index }
    }
}

impl<T> Clone for DequeCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DequeCursor<'_, T> {}

impl<'a, T> Cursor for DequeCursor<'a, T> {
    type Item = &'a T;
    const TRAVERSAL: Traversal = Traversal::RandomAccess;

    fn current(&mut self) -> &'a T {
        match self.deque.get(self.index) {
            Some(item) => item,
            None => past_the_end("a deque"),
        }
    }

    fn advance(&mut self) {
        debug_assert!(self.index < self.deque.len(), "advanced past the end of a deque");
        self.index += 1;
    }

    fn same_position(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> ForwardCursor for DequeCursor<'_, T> {}

impl<T> BidirectionalCursor for DequeCursor<'_, T> {
    fn retreat(&mut self) {
        self.index = offset(self.index, -1);
    }
}

impl<'a, T> RandomAccessCursor for DequeCursor<'a, T> {
    fn jump(&mut self, n: isize) {
        self.index = offset(self.index, n);
    }

    fn distance_from(&self, origin: &Self) -> isize {
        self.index as isize - origin.index as isize
    }

    fn at(&self, n: isize) -> &'a T {
        &self.deque[offset(self.index, n)]
    }
}

position_eq!(['a, T] DequeCursor<'a, T>);
random_access_ops!(['a, T] DequeCursor<'a, T>);

/// Forward cursor over any cloneable iterator (linked lists, sets, `chars`).
///
/// A live cursor counts the elements it has stepped over. The end cursor is
/// a bare marker, so building a view never walks the iterator and endless
/// iterators work under [`take`](crate::take). A live cursor sits at the end
/// once its iterator has nothing left.
pub struct IterCursor<I: Iterator> {
    iter: Option<I>,
    offset: usize,
    head: Cached<I::Item>,
}

impl<I> IterCursor<I>
where
    I: Iterator + Clone,
{
    /// Cursor at the first element of `iter`.
    pub fn begin(iter: I) -> Self {
        Self {
            iter: Some(iter),
            offset: 0,
            head: Cached::Empty,
        }
    }

    /// The end marker.
    pub fn end() -> Self {
        Self {
            iter: None,
            offset: 0,
            head: Cached::Empty,
        }
    }

    /// Elements stepped over so far; zero for the end marker.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn exhausted(&self) -> bool {
        match &self.iter {
            Some(iter) => iter.clone().next().is_none(),
            None => true,
        }
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            offset: self.offset,
            head: self.head.clone(),
        }
    }
}

impl<I: Iterator> fmt::Debug for IterCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("end", &self.iter.is_none())
            .field("offset", &self.offset)
            .field("cached", &self.head.is_filled())
            .finish()
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;
    const TRAVERSAL: Traversal = Traversal::Forward;

    fn current(&mut self) -> I::Item {
        let iter = &self.iter;
        self.head
            .get_or_compute(|| match iter.as_ref().and_then(|iter| iter.clone().next()) {
                Some(item) => item,
                None => past_the_end("an iterator"),
            })
    }

    fn advance(&mut self) {
        let stepped = self.iter.as_mut().and_then(Iterator::next);
        debug_assert!(stepped.is_some(), "advanced past the end of an iterator");
        self.offset += 1;
        self.head.invalidate();
    }

    fn same_position(&self, other: &Self) -> bool {
        match (&self.iter, &other.iter) {
            (Some(_), Some(_)) => self.offset == other.offset,
            (None, None) => true,
            (Some(_), None) => self.exhausted(),
            (None, Some(_)) => other.exhausted(),
        }
    }
}

impl<I> ForwardCursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
}

position_eq!([I: Iterator] IterCursor<I>);

/// Single-pass cursor over any iterator.
///
/// Like a stream reader it holds the element it is positioned on, so the
/// first element is pulled when the cursor is created. Two live input
/// cursors never compare equal; only two exhausted ones do.
pub struct InputCursor<I: Iterator> {
    state: Option<Reading<I>>,
}

struct Reading<I: Iterator> {
    iter: I,
    head: I::Item,
}

impl<I: Iterator> InputCursor<I> {
    /// Cursor positioned on the first element of `iter`.
    pub fn begin(mut iter: I) -> Self {
        Self {
            state: iter.next().map(|head| Reading { iter, head }),
        }
    }

    /// The exhausted position.
    pub fn end() -> Self {
        Self { state: None }
    }
}

impl<I: Iterator> fmt::Debug for InputCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputCursor")
            .field("exhausted", &self.state.is_none())
            .finish()
    }
}

impl<I> Cursor for InputCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    const TRAVERSAL: Traversal = Traversal::SinglePass;

    fn current(&mut self) -> I::Item {
        match &self.state {
            Some(reading) => reading.head.clone(),
            None => past_the_end("an input stream"),
        }
    }

    fn advance(&mut self) {
        debug_assert!(self.state.is_some(), "advanced past the end of an input stream");
        if let Some(Reading { mut iter, .. }) = self.state.take() {
            self.state = iter.next().map(|head| Reading { iter, head });
        }
    }

    fn same_position(&self, other: &Self) -> bool {
        self.state.is_none() && other.state.is_none()
    }
}

position_eq!([I: Iterator] InputCursor<I>);
