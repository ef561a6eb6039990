//! Assertion functions for comparing combinator outputs with expectations.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Assert that two sequences are equal in order and content.
///
/// # Panics
///
/// Panics with a detailed message if the sequences differ in length or in
/// any position.
///
/// # Example
///
/// ```
/// use bifold::testing::assert_sequences_equal;
///
/// assert_sequences_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_sequences_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Sequence length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Sequence mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that a sequence has the expected number of elements.
///
/// # Panics
///
/// Panics if the length differs.
pub fn assert_sequence_size<T>(seq: &[T], expected_size: usize) {
    assert_eq!(
        seq.len(),
        expected_size,
        "Sequence size mismatch:\n  Expected: {expected_size}\n  Actual: {}",
        seq.len()
    );
}

/// Assert that a sequence contains a specific element.
///
/// # Panics
///
/// Panics if the element is absent.
///
/// # Example
///
/// ```
/// use bifold::testing::assert_contains;
///
/// assert_contains(&[1, 2, 3, 4], &3);
/// ```
pub fn assert_contains<T: Debug + PartialEq>(seq: &[T], element: &T) {
    assert!(
        seq.contains(element),
        "Element not found in sequence:\n  Looking for: {element:?}\n  Sequence: {seq:?}"
    );
}

/// Assert that every element satisfies a predicate.
///
/// # Panics
///
/// Panics at the first element that fails the predicate.
pub fn assert_all<T: Debug>(seq: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in seq.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed at index {i}:\n  Element: {item:?}\n  Sequence: {seq:?}"
        );
    }
}

/// Assert that no element satisfies a predicate.
///
/// # Panics
///
/// Panics at the first element that matches the predicate.
pub fn assert_none<T: Debug>(seq: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in seq.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly held at index {i}:\n  Element: {item:?}\n  Sequence: {seq:?}"
        );
    }
}

/// Assert that two hash maps hold the same entries.
///
/// # Panics
///
/// Panics if the maps differ in size, keys, or any value.
///
/// # Example
///
/// ```
/// use bifold::testing::assert_maps_equal;
/// use std::collections::HashMap;
///
/// let mut actual = HashMap::new();
/// actual.insert("a", 1);
///
/// let mut expected = HashMap::new();
/// expected.insert("a", 1);
///
/// assert_maps_equal(&actual, &expected);
/// ```
pub fn assert_maps_equal<K, V, S: BuildHasher>(actual: &HashMap<K, V, S>, expected: &HashMap<K, V, S>)
where
    K: Debug + Eq + Hash,
    V: Debug + PartialEq,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "Map size mismatch:\n  Expected size: {}\n  Actual size: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (key, expected_value) in expected {
        match actual.get(key) {
            Some(actual_value) if actual_value == expected_value => {}
            Some(actual_value) => {
                panic!(
                    "Map value mismatch for key {key:?}:\n  Expected: {expected_value:?}\n  Actual: {actual_value:?}"
                );
            }
            None => panic!("Map missing key: {key:?}"),
        }
    }
}
