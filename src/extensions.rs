//! Method-call syntax for the sequence combinators.
//!
//! [`SequenceExt`] mirrors the free functions as methods on any slice (and
//! so on `Vec<T>` and arrays through deref), which reads better inside
//! longer expressions. Each method delegates to its free-function
//! counterpart without changing the contract.

use std::collections::HashMap;
use std::hash::Hash;

use crate::combinators::{filter_transform, fold, select, to_keyed_map};
use crate::error::EmptyInputError;

/// Sequence combinators as methods.
///
/// # Example
/// ```
/// use bifold::SequenceExt;
///
/// let numbers = vec![4, 5, 6];
/// assert_eq!(numbers.fold_with(0, |acc, n| acc + n), 15);
/// assert_eq!(numbers.select_with(|a, b| if b > a { b } else { a })?, 6);
/// # Ok::<(), bifold::EmptyInputError>(())
/// ```
pub trait SequenceExt<T> {
    /// Method form of [`fold`](crate::fold).
    fn fold_with<F>(&self, seed: T, combine: F) -> T
    where
        T: Clone,
        F: FnMut(T, T) -> T;

    /// Method form of [`select`](crate::select).
    fn select_with<F>(&self, choose: F) -> Result<T, EmptyInputError>
    where
        T: Clone,
        F: FnMut(T, T) -> T;

    /// Method form of [`filter_transform`](crate::filter_transform).
    fn filter_transform_with<U, R, F>(&self, condition: &U, transform: F) -> Vec<R>
    where
        F: FnMut(&T, &U) -> Option<R>;

    /// Method form of [`to_keyed_map`](crate::to_keyed_map).
    fn to_keyed_map_with<R, F>(&self, value_of: F) -> HashMap<T, R>
    where
        T: Clone + Eq + Hash,
        F: FnMut(&T) -> R;
}

impl<T> SequenceExt<T> for [T] {
    fn fold_with<F>(&self, seed: T, combine: F) -> T
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        fold(self, seed, combine)
    }

    fn select_with<F>(&self, choose: F) -> Result<T, EmptyInputError>
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        select(self, choose)
    }

    fn filter_transform_with<U, R, F>(&self, condition: &U, transform: F) -> Vec<R>
    where
        F: FnMut(&T, &U) -> Option<R>,
    {
        filter_transform(self, condition, transform)
    }

    fn to_keyed_map_with<R, F>(&self, value_of: F) -> HashMap<T, R>
    where
        T: Clone + Eq + Hash,
        F: FnMut(&T) -> R,
    {
        to_keyed_map(self, value_of)
    }
}
