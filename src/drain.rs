//! Draining views into owned containers.
//!
//! [`copy_range`] appends through [`Extend`], so it works with any standard
//! collection. Containers whose natural insertion point is the front are
//! reached through [`front_inserter`].

use std::collections::{LinkedList, VecDeque};
use std::ops::Add;

use tracing::trace;

use crate::view::IntoView;

/// Append every element of `source` to `dest`; returns how many were written.
///
/// `source` can be anything `|` accepts: a container reference, an owned
/// `Vec`, or a view.
///
/// Standard collections extend from both `T` and `&T`, so a destination
/// receiving borrowed elements needs its element type spelled out:
///
/// ```
/// use rangepipe::{copy_range, filter};
///
/// let data = [1, 2, 3, 4];
/// let mut evens: Vec<&i32> = Vec::new();
/// copy_range(&mut evens, &data | filter(|x: &&i32| **x % 2 == 0));
/// assert_eq!(evens, [&2, &4]);
/// ```
pub fn copy_range<D, S>(dest: &mut D, source: S) -> usize
where
    S: IntoView,
    D: Extend<<S::Cursor as crate::cursor::Cursor>::Item>,
{
    let mut written = 0;
    dest.extend(source.into_view().into_iter().inspect(|_| written += 1));
    trace!(written, "drained view");
    written
}

/// Containers that can insert at the front.
pub trait FrontInsert<T> {
    /// Insert `item` before the current first element.
    fn push_front_item(&mut self, item: T);
}

impl<T> FrontInsert<T> for VecDeque<T> {
    fn push_front_item(&mut self, item: T) {
        self.push_front(item);
    }
}

impl<T> FrontInsert<T> for LinkedList<T> {
    fn push_front_item(&mut self, item: T) {
        self.push_front(item);
    }
}

/// [`Extend`] adapter that inserts each element at the front of its
/// container, so the drained elements end up in reverse order.
#[derive(Debug)]
pub struct FrontInserter<'d, D> {
    dest: &'d mut D,
}

/// Wrap `dest` so that [`copy_range`] inserts at its front.
pub fn front_inserter<D>(dest: &mut D) -> FrontInserter<'_, D> {
    FrontInserter { dest }
}

impl<T, D: FrontInsert<T>> Extend<T> for FrontInserter<'_, D> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.dest.push_front_item(item);
        }
    }
}

/// Fold `source` with `+`, starting from `init`.
pub fn accumulate<S, T>(source: S, init: T) -> T
where
    S: IntoView,
    T: Add<<S::Cursor as crate::cursor::Cursor>::Item, Output = T>,
{
    source.into_view().into_iter().fold(init, |total, item| total + item)
}
