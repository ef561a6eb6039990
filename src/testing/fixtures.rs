//! Ready-made datasets for tests and demos.

use crate::record::Developer;

/// The seven-developer roster used across the selection tests.
///
/// # Example
///
/// ```
/// use bifold::testing::sample_developers;
///
/// let roster = sample_developers();
/// assert_eq!(roster.len(), 7);
/// ```
#[must_use]
pub fn sample_developers() -> Vec<Developer> {
    [
        ("Daniel", 330_000.0),
        ("Jordan", 430_000.0),
        ("Spark", 530_000.0),
        ("Haya", 450_000.0),
        ("Neil", 620_000.0),
        ("Zara", 650_000.0),
        ("Sara", 780_000.0),
    ]
    .into_iter()
    .map(|(name, salary)| {
        Developer::new(Some(name), Some(salary)).expect("roster attributes are fully specified")
    })
    .collect()
}

/// Language names used across the filter and keyed-conversion tests.
///
/// # Example
///
/// ```
/// use bifold::testing::language_names;
///
/// assert!(language_names().contains(&"Java".to_string()));
/// ```
#[must_use]
pub fn language_names() -> Vec<String> {
    ["C", "C++", "Ceylon", "Camel", "Go", "Java", "C#", "Kotlin"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
