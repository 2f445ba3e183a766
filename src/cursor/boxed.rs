//! Type-erased cursors
//!
//! Pipelines assembled at run time (see `crate::pipeline`) cannot name the
//! nested adaptor types they produce, so each stage boxes its output. The
//! capability is kept as part of the boxed type: `BoxedForward` for
//! forward-only chains, `BoxedBidirectional` when stepping back is still
//! possible.

use std::any::Any;
use std::fmt;

use super::{BidirectionalCursor, Cursor, ForwardCursor, Traversal};
use crate::view::View;

trait DynForward<T> {
    fn dyn_current(&mut self) -> T;
    fn dyn_advance(&mut self);
    fn dyn_same_position(&self, other: &dyn Any) -> bool;
    fn dyn_settle(&mut self);
    fn dyn_clone(&self) -> Box<dyn DynForward<T>>;
    fn dyn_as_any(&self) -> &dyn Any;
}

impl<C> DynForward<C::Item> for C
where
    C: ForwardCursor + 'static,
{
    fn dyn_current(&mut self) -> C::Item {
        self.current()
    }

    fn dyn_advance(&mut self) {
        self.advance();
    }

    fn dyn_same_position(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<C>()
            .map_or(false, |other| self.same_position(other))
    }

    fn dyn_settle(&mut self) {
        self.settle();
    }

    fn dyn_clone(&self) -> Box<dyn DynForward<C::Item>> {
        Box::new(self.clone())
    }

    fn dyn_as_any(&self) -> &dyn Any {
        self
    }
}

trait DynBidirectional<T> {
    fn dyn_current(&mut self) -> T;
    fn dyn_advance(&mut self);
    fn dyn_retreat(&mut self);
    fn dyn_same_position(&self, other: &dyn Any) -> bool;
    fn dyn_settle(&mut self);
    fn dyn_clone(&self) -> Box<dyn DynBidirectional<T>>;
    fn dyn_as_any(&self) -> &dyn Any;
}

impl<C> DynBidirectional<C::Item> for C
where
    C: BidirectionalCursor + 'static,
{
    fn dyn_current(&mut self) -> C::Item {
        self.current()
    }

    fn dyn_advance(&mut self) {
        self.advance();
    }

    fn dyn_retreat(&mut self) {
        self.retreat();
    }

    fn dyn_same_position(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<C>()
            .map_or(false, |other| self.same_position(other))
    }

    fn dyn_settle(&mut self) {
        self.settle();
    }

    fn dyn_clone(&self) -> Box<dyn DynBidirectional<C::Item>> {
        Box::new(self.clone())
    }

    fn dyn_as_any(&self) -> &dyn Any {
        self
    }
}

/// Forward cursor behind a box.
pub struct BoxedForward<T> {
    inner: Box<dyn DynForward<T>>,
}

impl<T: 'static> BoxedForward<T> {
    /// Erase the concrete type of `cursor`.
    pub fn new<C>(cursor: C) -> Self
    where
        C: ForwardCursor<Item = T> + 'static,
    {
        Self {
            inner: Box::new(cursor),
        }
    }
}

impl<T: 'static> Clone for BoxedForward<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.dyn_clone(),
        }
    }
}

impl<T> fmt::Debug for BoxedForward<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedForward").finish_non_exhaustive()
    }
}

impl<T: 'static> Cursor for BoxedForward<T> {
    type Item = T;
    const TRAVERSAL: Traversal = Traversal::Forward;

    fn current(&mut self) -> T {
        self.inner.dyn_current()
    }

    fn advance(&mut self) {
        self.inner.dyn_advance();
    }

    fn same_position(&self, other: &Self) -> bool {
        self.inner.dyn_same_position(other.inner.dyn_as_any())
    }

    fn settle(&mut self) {
        self.inner.dyn_settle();
    }
}

impl<T: 'static> ForwardCursor for BoxedForward<T> {}

/// Bidirectional cursor behind a box.
pub struct BoxedBidirectional<T> {
    inner: Box<dyn DynBidirectional<T>>,
}

impl<T: 'static> BoxedBidirectional<T> {
    /// Erase the concrete type of `cursor`.
    pub fn new<C>(cursor: C) -> Self
    where
        C: BidirectionalCursor<Item = T> + 'static,
    {
        Self {
            inner: Box::new(cursor),
        }
    }
}

impl<T: 'static> Clone for BoxedBidirectional<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.dyn_clone(),
        }
    }
}

impl<T> fmt::Debug for BoxedBidirectional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedBidirectional").finish_non_exhaustive()
    }
}

impl<T: 'static> Cursor for BoxedBidirectional<T> {
    type Item = T;
    const TRAVERSAL: Traversal = Traversal::Bidirectional;

    fn current(&mut self) -> T {
        self.inner.dyn_current()
    }

    fn advance(&mut self) {
        self.inner.dyn_advance();
    }

    fn same_position(&self, other: &Self) -> bool {
        self.inner.dyn_same_position(other.inner.dyn_as_any())
    }

    fn settle(&mut self) {
        self.inner.dyn_settle();
    }
}

impl<T: 'static> ForwardCursor for BoxedBidirectional<T> {}

impl<T: 'static> BidirectionalCursor for BoxedBidirectional<T> {
    fn retreat(&mut self) {
        self.inner.dyn_retreat();
    }
}

position_eq!([T: 'static] BoxedForward<T>);
position_eq!([T: 'static] BoxedBidirectional<T>);

impl<C> View<C>
where
    C: ForwardCursor + 'static,
{
    /// Erase the cursor type, keeping forward traversal.
    pub fn boxed(self) -> View<BoxedForward<C::Item>> {
        let (begin, end) = self.into_parts();
        View::new(BoxedForward::new(begin), BoxedForward::new(end))
    }
}

impl<C> View<C>
where
    C: BidirectionalCursor + 'static,
{
    /// Erase the cursor type, keeping bidirectional traversal.
    pub fn boxed_bidirectional(self) -> View<BoxedBidirectional<C::Item>> {
        let (begin, end) = self.into_parts();
        View::new(BoxedBidirectional::new(begin), BoxedBidirectional::new(end))
    }
}

#[cfg(test)]
mod tests {
    use crate::{filter, reverse, view};

    #[test]
    fn test_boxed_view_matches_concrete_view() {
        let data = vec![1, 2, 3, 4, 5, 6];
        let concrete: Vec<i32> = (view(data.clone()) | filter(|x: &i32| x % 2 == 0))
            .into_iter()
            .collect();
        let boxed: Vec<i32> = (view(data) | filter(|x: &i32| x % 2 == 0))
            .boxed()
            .into_iter()
            .collect();
        assert_eq!(concrete, boxed);
    }

    #[test]
    fn test_boxed_bidirectional_can_be_reversed() {
        let erased = view(vec![1, 2, 3]).boxed_bidirectional();
        let reversed: Vec<i32> = (erased | reverse()).into_iter().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }
}
