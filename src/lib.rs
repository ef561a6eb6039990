//! # Bifold
//!
//! A small library of **two-argument function combinators** for in-memory
//! sequences. Bifold packages the handful of higher-order building blocks
//! that ad hoc collection code keeps reinventing -- dispatching a binary
//! action, chaining a binary transform into a unary one, left folds,
//! best-element selection, filter-map fusion, and keyed-map conversion -- as
//! plain generic functions over slices and closures.
//!
//! ## Key Features
//!
//! - **Closure-first API** - every combinator takes ordinary `Fn`/`FnMut`/`FnOnce` values
//! - **Strict ordering contracts** - folds and selections visit elements in sequence order
//! - **Typed failures** - empty-input selection and invalid record construction
//!   surface as real error values, never sentinels
//! - **Fallible variants** - `try_*` forms thread caller errors through unchanged
//! - **Method-call syntax** - [`SequenceExt`] mirrors the free functions on any slice
//! - **Testing toolkit** - assertions, data builders, and fixtures under [`testing`]
//!
//! ## Quick Start
//!
//! ```
//! use bifold::{filter_transform, fold, select, to_keyed_map};
//!
//! // Reduce a sequence with a seed and a binary combiner.
//! let total = fold(&[4, 5, 6], 0, |acc, n| acc + n);
//! assert_eq!(total, 15);
//!
//! // Pick a "winner" with a caller-defined rule.
//! let longest = select(&["fn", "trait", "impl"], |a, b| {
//!     if b.len() > a.len() { b } else { a }
//! })?;
//! assert_eq!(longest, "trait");
//!
//! // Filter and transform in one pass, steered by an auxiliary condition.
//! let c_family = filter_transform(&["C", "C++", "Go"], &"C", |lang, prefix| {
//!     lang.starts_with(*prefix).then(|| lang.to_string())
//! });
//! assert_eq!(c_family, ["C", "C++"]);
//!
//! // Key a map by the elements themselves.
//! let lengths = to_keyed_map(&["Java", "C#"], |lang| lang.len());
//! assert_eq!(lengths[&"Java"], 4);
//! # Ok::<(), bifold::EmptyInputError>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Sequences
//!
//! Inputs are plain slices: ordered, finite, and treated as immutable for
//! the duration of a call. Combinators never mutate their input, never
//! return it as the output, and never retain references to it.
//!
//! ### Caller-supplied functions
//!
//! The combinators own no policy. What "winning" means, which elements
//! survive a filter, how values are derived from keys -- all of it comes
//! from the closure the caller passes in. Panics from a closure propagate
//! unchanged, and the `try_*` forms ([`try_fold`], [`try_to_keyed_map`],
//! and friends) do the same for `Result` errors.
//!
//! ### Error handling
//!
//! Selection over an empty slice returns [`EmptyInputError`] rather than an
//! in-band sentinel, since the element type is unconstrained and may have no
//! safe sentinel. Constructing a [`Developer`] without a required attribute
//! returns [`MissingAttributeError`] naming the attribute. Nothing is
//! retried, logged, or swallowed internally.
//!
//! ## Module Overview
//!
//! - [`combinators`] - the core combinators and their fallible variants
//! - [`error`] - typed error values
//! - [`record`] - a validated value object for non-primitive demos
//! - [`extensions`] - method-call syntax over slices
//! - [`testing`] - assertions, builders, debug dumps, and fixtures

pub mod combinators;
pub mod error;
pub mod extensions;
pub mod record;
pub mod testing;

pub use combinators::{
    compose, dispatch, filter_transform, fold, pipe, select, to_keyed_map, try_filter_transform,
    try_fold, try_select, try_to_keyed_map,
};
pub use error::{EmptyInputError, MissingAttributeError};
pub use extensions::SequenceExt;
pub use record::Developer;
