//! Sequence reductions: strict left fold and best-element selection.

use crate::error::EmptyInputError;

/// Strict left fold of `seq` starting from `seed`.
///
/// Elements are visited in sequence order; the running result is passed as
/// the first argument and the element as the second, so
/// `fold(&[a, b, c], s, f)` is exactly `f(f(f(s, a), b), c)`. The
/// association is part of the contract -- `combine` need not be commutative
/// or associative. An empty slice returns the seed untouched.
///
/// Elements are cloned into `combine`.
///
/// # Example
/// ```
/// use bifold::fold;
///
/// assert_eq!(fold(&[4, 5, 6], 0, |acc, n| acc + n), 15);
/// // Left association is observable with a non-commutative combiner:
/// assert_eq!(fold(&[1, 2, 3], 0, |acc, n| acc - n), -6);
/// ```
pub fn fold<T, F>(seq: &[T], seed: T, mut combine: F) -> T
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    let mut result = seed;
    for elem in seq {
        result = combine(result, elem.clone());
    }
    result
}

/// Select the winning element of a non-empty `seq`.
///
/// The first element seeds the running result, then `choose(current, next)`
/// folds over the rest in order, keeping whatever `choose` returns. Max-by
/// and min-by are conventions of the caller's `choose`; nothing here
/// constrains its answer, and ties resolve however `choose` resolves them.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when `seq` has no elements. `T` is
/// unconstrained, so "no winner" has no safe in-band sentinel and must stay
/// distinguishable from every valid `T`.
///
/// # Example
/// ```
/// use bifold::select;
///
/// let max = select(&[3, 9, 4], |a, b| if b > a { b } else { a })?;
/// assert_eq!(max, 9);
/// # Ok::<(), bifold::EmptyInputError>(())
/// ```
pub fn select<T, F>(seq: &[T], mut choose: F) -> Result<T, EmptyInputError>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    let (first, rest) = seq.split_first().ok_or(EmptyInputError)?;
    let mut result = first.clone();
    for elem in rest {
        result = choose(result, elem.clone());
    }
    Ok(result)
}
