//! # Lazy Range Adaptors
//!
//! Composable, lazily evaluated views over sequences, chained with `|`:
//!
//! ```
//! use rangepipe::{copy_range, filter, transform};
//!
//! let data = vec![1, 2, 3, 6, 9, 12, 13];
//! let mut squares = Vec::new();
//! copy_range(
//!     &mut squares,
//!     &data | filter(|x: &&i32| **x % 2 == 0) | transform(|x: &i32| x * x),
//! );
//! assert_eq!(squares, vec![4, 36, 144]);
//! ```
//!
//! ## Layers
//!
//! 1. **Cursors** (`cursor`): position markers graded by traversal
//!    capability, single-pass up to random access
//! 2. **Views** (`view`): a `(begin, end)` cursor pair; iterable, cheap to copy
//! 3. **Adaptors** (`adaptor`): `filter`, `transform`, `take`, `reverse`,
//!    `sort`, plus the `generate` sources
//! 4. **Drains** (`drain`): `copy_range` and friends move elements into
//!    owned containers
//! 5. **Run-time pipelines** (`pipeline`): the same adaptors assembled from
//!    text, with capability checks moved to run time
//!
//! Nothing is read from a source until a view is iterated, and an adaptor
//! that needs more capability than its source offers does not compile.

#![warn(missing_docs, missing_debug_implementations)]

#[macro_use]
mod macros;

pub mod adaptor; // filter, transform, take, reverse, sort, generate
pub mod cursor; // capability traits and source cursors
pub mod drain; // draining views into containers
pub mod pipeline; // text-driven pipelines
pub mod view; // views and source conversion

pub use adaptor::{filter, generate, generate_n, reverse, sort, take, transform};
pub use cursor::Traversal;
pub use drain::{accumulate, copy_range, front_inserter};
pub use view::{input, iterate, view, IntoView, View};

use thiserror::Error;

/// Errors raised by the checked surfaces: indexed access and run-time
/// pipelines. Statically composed adaptors never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Indexed access past the end of a view.
    #[error("index {index} out of range for view of length {len}")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the view.
        len: usize,
    },

    /// Stage keyword not recognised.
    #[error("unknown stage '{0}'")]
    UnknownStage(String),

    /// Stage keyword recognised but its argument is not.
    #[error("invalid argument '{value}' for stage '{stage}'")]
    InvalidArgument {
        /// Stage keyword.
        stage: String,
        /// Offending argument text.
        value: String,
    },

    /// Stage applied to a source that cannot move the way it needs.
    #[error("stage '{stage}' needs a {required} source, found {found}")]
    Capability {
        /// Stage as written.
        stage: String,
        /// Minimum traversal the stage needs.
        required: Traversal,
        /// Traversal the preceding stages provide.
        found: Traversal,
    },

    /// Draining or sorting an endless source with nothing to bound it.
    #[error("endless source needs a take stage before it can be drained")]
    Unbounded,
}
