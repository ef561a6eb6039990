//! Core combinators over in-memory sequences.
//!
//! Every function here is eager, synchronous, and independent of the others:
//!
//! - [`dispatch`] -- invoke a two-argument action for its side effect.
//! - [`compose`] -- apply a two-argument transform, then a one-argument one.
//! - [`pipe`] -- the one-argument chaining counterpart of [`compose`].
//! - [`fold`] -- strict left fold of a slice with a seed.
//! - [`select`] -- winning element of a non-empty slice under a caller rule.
//! - [`filter_transform`] -- single-pass filter-map fusion with an auxiliary
//!   condition value.
//! - [`to_keyed_map`] -- slice to map, keyed by the elements themselves.
//!
//! The `try_*` variants accept fallible closures and surface the first error.
//!
//! # Examples
//! ```
//! use bifold::combinators::{fold, select};
//!
//! let product = fold(&[2, 3, 4], 1, |acc, n| acc * n);
//! assert_eq!(product, 24);
//!
//! let shortest = select(&["alpha", "b", "gamma"], |a, b| {
//!     if b.len() < a.len() { b } else { a }
//! })?;
//! assert_eq!(shortest, "b");
//! # Ok::<(), bifold::EmptyInputError>(())
//! ```

mod apply;
mod keyed;
mod reduce;
mod transform;
mod try_process;

// Re-export all public combinators
pub use apply::{compose, dispatch, pipe};
pub use keyed::to_keyed_map;
pub use reduce::{fold, select};
pub use transform::filter_transform;
pub use try_process::{try_filter_transform, try_fold, try_select, try_to_keyed_map};
