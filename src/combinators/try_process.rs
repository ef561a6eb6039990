use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use anyhow::{Result, anyhow};

use crate::error::EmptyInputError;

/// [`fold`](crate::fold) with a fallible combiner.
///
/// The first `Err` aborts the fold and propagates unchanged.
pub fn try_fold<T, E, F>(seq: &[T], seed: T, mut combine: F) -> Result<T, E>
where
    T: Clone,
    F: FnMut(T, T) -> Result<T, E>,
{
    let mut result = seed;
    for elem in seq {
        result = combine(result, elem.clone())?;
    }
    Ok(result)
}

/// [`select`](crate::select) with a fallible chooser.
///
/// Fail-fast terminal: an empty input surfaces [`EmptyInputError`], and the
/// first failed choice is wrapped with context.
pub fn try_select<T, E, F>(seq: &[T], mut choose: F) -> Result<T>
where
    T: Clone,
    E: Display,
    F: FnMut(T, T) -> Result<T, E>,
{
    let (first, rest) = seq.split_first().ok_or(EmptyInputError)?;
    let mut result = first.clone();
    for elem in rest {
        result = choose(result, elem.clone()).map_err(|e| anyhow!("selection failed: {e}"))?;
    }
    Ok(result)
}

/// [`filter_transform`](crate::filter_transform) with a fallible transform.
///
/// The first `Err` aborts the pass and propagates unchanged.
pub fn try_filter_transform<T, U, R, E, F>(
    seq: &[T],
    condition: &U,
    mut transform: F,
) -> Result<Vec<R>, E>
where
    F: FnMut(&T, &U) -> Result<Option<R>, E>,
{
    let mut result = Vec::new();
    for elem in seq {
        if let Some(mapped) = transform(elem, condition)? {
            result.push(mapped);
        }
    }
    Ok(result)
}

/// [`to_keyed_map`](crate::to_keyed_map) with a fallible value function.
///
/// Atomic: the first failure discards whatever was built so far and returns
/// the collaborator's error unchanged.
pub fn try_to_keyed_map<T, R, E, F>(seq: &[T], mut value_of: F) -> Result<HashMap<T, R>, E>
where
    T: Clone + Eq + Hash,
    F: FnMut(&T) -> Result<R, E>,
{
    let mut result = HashMap::with_capacity(seq.len());
    for elem in seq {
        let value = value_of(elem)?;
        result.insert(elem.clone(), value);
    }
    Ok(result)
}
