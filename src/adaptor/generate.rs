//! `generate` / `generate_n`: sequences produced by calling a function
//!
//! Each position calls the producer at most once: the first read computes
//! and memoizes the value, later reads at the same position return the memo,
//! and only advancing asks the producer for the next value. A stateful or
//! random producer therefore still reads consistently at a fixed position.
//!
//! The unbounded form ends on a dedicated `End` marker that equals only
//! another `End`. Two live cursors never compare equal, so an unbounded
//! view runs forever unless something like [`take`](super::take) counts
//! the steps.
//!
//! Both forms report [`Traversal::Forward`] and never anything stronger.
//! The cursors are [`ForwardCursor`]s when the producer is `Clone`: a copy
//! forks the producer state, so it replays the same values only if the
//! producer is a pure function of what it captured.

use std::fmt;

use crate::cursor::{past_the_end, Cached, Cursor, ForwardCursor, Traversal};
use crate::view::View;

enum Endpoint<G> {
    Live(G),
    End,
}

/// Cursor of an unbounded [`generate`] view.
pub struct GenerateCursor<G, T> {
    state: Endpoint<G>,
    cache: Cached<T>,
}

/// An endless view of `producer()`, `producer()`, ...
pub fn generate<G, T>(producer: G) -> View<GenerateCursor<G, T>>
where
    G: FnMut() -> T,
    T: Clone,
{
    View::new(
        GenerateCursor {
            state: Endpoint::Live(producer),
            cache: Cached::Empty,
        },
        GenerateCursor {
            state: Endpoint::End,
            cache: Cached::Empty,
        },
    )
}

impl<G, T> GenerateCursor<G, T> {
    /// Whether this is the end marker.
    pub fn is_end(&self) -> bool {
        matches!(self.state, Endpoint::End)
    }
}

impl<G: Clone, T: Clone> Clone for GenerateCursor<G, T> {
    fn clone(&self) -> Self {
        let state = match &self.state {
            Endpoint::Live(producer) => Endpoint::Live(producer.clone()),
            Endpoint::End => Endpoint::End,
        };
        Self {
            state,
            cache: self.cache.clone(),
        }
    }
}

impl<G, T> fmt::Debug for GenerateCursor<G, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateCursor")
            .field("end", &self.is_end())
            .field("cached", &self.cache.is_filled())
            .finish_non_exhaustive()
    }
}

impl<G, T> Cursor for GenerateCursor<G, T>
where
    G: FnMut() -> T,
    T: Clone,
{
    type Item = T;
    const TRAVERSAL: Traversal = Traversal::Forward;

    fn current(&mut self) -> T {
        match &mut self.state {
            Endpoint::Live(producer) => self.cache.get_or_compute(producer),
            Endpoint::End => past_the_end("a generated sequence"),
        }
    }

    fn advance(&mut self) {
        debug_assert!(!self.is_end(), "advanced the end of a generated sequence");
        self.cache.invalidate();
    }

    fn same_position(&self, other: &Self) -> bool {
        self.is_end() && other.is_end()
    }
}

impl<G, T> ForwardCursor for GenerateCursor<G, T>
where
    G: FnMut() -> T + Clone,
    T: Clone,
{
}

position_eq!([G, T] GenerateCursor<G, T>);

/// Cursor of a bounded [`generate_n`] view.
///
/// Positions are counted, so cursors compare by how far they are from the
/// start.
pub struct GenerateNCursor<G, T> {
    producer: Option<G>,
    cache: Cached<T>,
    position: usize,
    limit: usize,
}

/// A view of exactly `count` values from `producer`.
pub fn generate_n<G, T>(producer: G, count: usize) -> View<GenerateNCursor<G, T>>
where
    G: FnMut() -> T,
    T: Clone,
{
    View::new(
        GenerateNCursor {
            producer: Some(producer),
            cache: Cached::Empty,
            position: 0,
            limit: count,
        },
        GenerateNCursor {
            producer: None,
            cache: Cached::Empty,
            position: count,
            limit: count,
        },
    )
}

impl<G, T> GenerateNCursor<G, T> {
    /// Values produced before this position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Values left to produce.
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }
}

impl<G: Clone, T: Clone> Clone for GenerateNCursor<G, T> {
    fn clone(&self) -> Self {
        Self {
            producer: self.producer.clone(),
            cache: self.cache.clone(),
            position: self.position,
            limit: self.limit,
        }
    }
}

impl<G, T> fmt::Debug for GenerateNCursor<G, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateNCursor")
            .field("position", &self.position)
            .field("limit", &self.limit)
            .field("cached", &self.cache.is_filled())
            .finish_non_exhaustive()
    }
}

impl<G, T> Cursor for GenerateNCursor<G, T>
where
    G: FnMut() -> T,
    T: Clone,
{
    type Item = T;
    const TRAVERSAL: Traversal = Traversal::Forward;

    fn current(&mut self) -> T {
        if self.position >= self.limit {
            past_the_end("a generated sequence");
        }
        match &mut self.producer {
            Some(producer) => self.cache.get_or_compute(producer),
            None => past_the_end("a generated sequence"),
        }
    }

    fn advance(&mut self) {
        debug_assert!(
            self.position < self.limit,
            "advanced past the end of a generated sequence"
        );
        self.position += 1;
        self.cache.invalidate();
    }

    fn same_position(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<G, T> ForwardCursor for GenerateNCursor<G, T>
where
    G: FnMut() -> T + Clone,
    T: Clone,
{
}

position_eq!([G, T] GenerateNCursor<G, T>);
