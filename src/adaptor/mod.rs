//! Adaptors and the `|` composition operator
//!
//! Each adaptor is a small token (`filter(p)`, `transform(f)`, `take(n)`,
//! `reverse()`, `sort()`) that turns a view into a new view. Applying it
//! with `source | token` is lazy: nothing is read from the source until the
//! result is iterated. `sort` is the exception; it drains its input when
//! applied.

mod filter;
mod generate;
mod reverse;
mod sort;
mod take;
mod transform;

pub use filter::{filter, Filter, FilterCursor};
pub use generate::{generate, generate_n, GenerateCursor, GenerateNCursor};
pub use reverse::{reverse, Reverse, ReverseCursor};
pub use sort::{sort, Sort};
pub use take::{take, Take, TakeCursor};
pub use transform::{transform, Transform, TransformCursor};

use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::ops::BitOr;

use crate::cursor::{Cursor, ForwardCursor};
use crate::view::{IntoView, View};

/// Turns a view over `C` into a view over `Self::Output`.
///
/// The capability an adaptor needs from its input is expressed as bounds on
/// `C` in its `Adaptor` impl.
pub trait Adaptor<C: Cursor> {
    /// Cursor type of the adapted view.
    type Output: Cursor;

    /// Wrap `source`.
    fn apply(self, source: View<C>) -> View<Self::Output>;
}

macro_rules! pipe_one {
    ([$($params:tt)*] $source:ty, $token:ty, [$($arg:tt)*]) => {
        impl<$($params)* $($arg)*> BitOr<$token> for $source
        where
            $token: Adaptor<<$source as IntoView>::Cursor>,
        {
            type Output = View<<$token as Adaptor<<$source as IntoView>::Cursor>>::Output>;

            fn bitor(self, adaptor: $token) -> Self::Output {
                adaptor.apply(self.into_view())
            }
        }
    };
}

macro_rules! pipe_sources {
    ($([$($params:tt)*] $source:ty;)+) => {$(
        pipe_one!([$($params)*] $source, Filter<P>, [P]);
        pipe_one!([$($params)*] $source, Transform<F>, [F]);
        pipe_one!([$($params)*] $source, Take, []);
        pipe_one!([$($params)*] $source, Reverse, []);
        pipe_one!([$($params)*] $source, Sort, []);
    )+};
}

pipe_sources! {
    [C: Cursor,] View<C>;
    ['v, C: ForwardCursor,] &'v View<C>;
    ['a, T,] &'a [T];
    ['a, T, const N: usize,] &'a [T; N];
    ['a, T,] &'a Vec<T>;
    ['a, T,] &'a VecDeque<T>;
    ['a, T,] &'a LinkedList<T>;
    ['a, T,] &'a BTreeSet<T>;
    [T: Clone,] Vec<T>;
}

// Text is forward-only, so it gets no `reverse`.
pipe_one!(['a,] &'a str, Filter<P>, [P]);
pipe_one!(['a,] &'a str, Transform<F>, [F]);
pipe_one!(['a,] &'a str, Take, []);
pipe_one!(['a,] &'a str, Sort, []);
pipe_one!(['a,] &'a String, Filter<P>, [P]);
pipe_one!(['a,] &'a String, Transform<F>, [F]);
pipe_one!(['a,] &'a String, Take, []);
pipe_one!(['a,] &'a String, Sort, []);
