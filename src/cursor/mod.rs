//! Position markers and their traversal capabilities
//!
//! A cursor identifies one place in a sequence. What a cursor may do is
//! layered into four traits, each a strict superset of the one before:
//!
//! | trait                 | moves                         | `Traversal`     |
//! |-----------------------|-------------------------------|-----------------|
//! | `Cursor`              | forward, once                 | `SinglePass`    |
//! | `ForwardCursor`       | forward, copies replay        | `Forward`       |
//! | `BidirectionalCursor` | forward and backward          | `Bidirectional` |
//! | `RandomAccessCursor`  | O(1) jumps and distances      | `RandomAccess`  |
//!
//! Adaptors state their minimum requirement as a trait bound, so handing a
//! forward-only sequence to `reverse` is a compile error rather than a fault
//! at run time.

mod boxed;
mod source;

pub use boxed::{BoxedBidirectional, BoxedForward};
pub use source::{DequeCursor, InputCursor, IterCursor, SharedCursor, SliceCursor};

use std::cmp::Ordering;
use std::fmt;

/// Traversal capability of a cursor, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Traversal {
    /// Each position can be read once; copies do not replay.
    SinglePass,
    /// Restartable: a copy replays the same positions.
    Forward,
    /// Forward plus stepping backward.
    Bidirectional,
    /// Bidirectional plus constant-time jumps and distances.
    RandomAccess,
}

impl Traversal {
    /// The weaker of `self` and `ceiling`.
    ///
    /// Adaptors use this to declare their output capability, e.g. a filter
    /// is `input.cap(Bidirectional)`.
    pub const fn cap(self, ceiling: Traversal) -> Traversal {
        if (self as u8) < (ceiling as u8) {
            self
        } else {
            ceiling
        }
    }

    /// Whether `self` provides everything `floor` does.
    pub const fn at_least(self, floor: Traversal) -> bool {
        self as u8 >= floor as u8
    }

    /// Lower-case name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Traversal::SinglePass => "single-pass",
            Traversal::Forward => "forward",
            Traversal::Bidirectional => "bidirectional",
            Traversal::RandomAccess => "random-access",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single-pass position marker.
///
/// `Item` is the declared yield type: borrowing sources yield references,
/// computing adaptors yield owned values. Reading `current` twice without
/// moving must produce the same value.
pub trait Cursor {
    /// Element type produced at each position.
    type Item;

    /// Traversal capability, fixed at compile time.
    const TRAVERSAL: Traversal;

    /// Element at the current position.
    ///
    /// Calling this on an end position is a precondition violation and
    /// panics.
    fn current(&mut self) -> Self::Item;

    /// Move to the next position.
    fn advance(&mut self);

    /// Whether both cursors denote the same position of one sequence.
    fn same_position(&self, other: &Self) -> bool;

    /// Finish any positioning work deferred at construction.
    ///
    /// Views call this before handing a cursor out or comparing it, which is
    /// what keeps building a pipeline free of predicate calls.
    fn settle(&mut self) {}
}

/// A restartable cursor: copies replay the same positions independently.
pub trait ForwardCursor: Cursor + Clone {}

/// A cursor that can also step backward.
pub trait BidirectionalCursor: ForwardCursor {
    /// Move to the previous position.
    fn retreat(&mut self);
}

/// A cursor with constant-time offsets.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Move by `n` positions (negative moves backward).
    fn jump(&mut self, n: isize);

    /// Signed number of positions from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> isize;

    /// Element `n` positions away, computed fresh without moving.
    fn at(&self, n: isize) -> Self::Item;

    /// Order of two positions within the same sequence.
    fn position_cmp(&self, other: &Self) -> Ordering {
        self.distance_from(other).cmp(&0)
    }
}

/// Single-slot memo for a value computed at the current position.
///
/// Every position-changing operation must call [`Cached::invalidate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cached<T> {
    /// Nothing computed at this position yet.
    Empty,
    /// Value computed at this position.
    Value(T),
}

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Cached::Empty
    }
}

impl<T> Cached<T> {
    /// Return the memoized value, computing it first if the slot is empty.
    pub fn get_or_compute(&mut self, compute: impl FnOnce() -> T) -> T
    where
        T: Clone,
    {
        match self {
            Cached::Value(value) => value.clone(),
            Cached::Empty => {
                let value = compute();
                *self = Cached::Value(value.clone());
                value
            }
        }
    }

    /// Drop the memoized value.
    pub fn invalidate(&mut self) {
        *self = Cached::Empty;
    }

    /// Whether a value is currently memoized.
    pub fn is_filled(&self) -> bool {
        matches!(self, Cached::Value(_))
    }
}

#[cold]
#[track_caller]
pub(crate) fn past_the_end(sequence: &str) -> ! {
    panic!("dereferenced the end position of {sequence}")
}
