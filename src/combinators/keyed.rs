use std::collections::HashMap;
use std::hash::Hash;

/// Build a map from `seq`, using each element as its own key and
/// `value_of(element)` as the value.
///
/// Later occurrences of an equal key overwrite earlier ones -- the ordinary
/// consequence of inserting into a map in sequence order, not a separate
/// code path. Iteration order of the result carries no meaning.
pub fn to_keyed_map<T, R, F>(seq: &[T], mut value_of: F) -> HashMap<T, R>
where
    T: Clone + Eq + Hash,
    F: FnMut(&T) -> R,
{
    let mut result = HashMap::with_capacity(seq.len());
    for elem in seq {
        let value = value_of(elem);
        result.insert(elem.clone(), value);
    }
    result
}
