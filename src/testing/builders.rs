//! Test data builders for creating input sequences fluently.

use std::ops::RangeInclusive;

/// A fluent builder for input sequences.
///
/// # Example
///
/// ```
/// use bifold::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::new()
///     .add_range(1..=10)
///     .add_value(100)
///     .add_repeated(42, 5)
///     .build();
///
/// assert_eq!(data.len(), 16); // 10 + 1 + 5
/// ```
#[derive(Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Append a single value.
    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    /// Append several values.
    #[must_use]
    pub fn add_values(mut self, values: Vec<T>) -> Self {
        self.data.extend(values);
        self
    }

    /// Append the same value `count` times.
    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        for _ in 0..count {
            self.data.push(value.clone());
        }
        self
    }

    /// Consume the builder and return the sequence.
    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }

    /// Current size of the sequence under construction.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the sequence under construction is still empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> TestDataBuilder<T>
where
    T: From<i32>,
{
    /// Append every value of an inclusive range.
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        for i in range {
            self.data.push(T::from(i));
        }
        self
    }
}

/// Generate an inclusive run of sequential integers.
///
/// # Example
///
/// ```
/// use bifold::testing::sequential_data;
///
/// assert_eq!(sequential_data(1, 5), vec![1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn sequential_data(start: i32, end: i32) -> Vec<i32> {
    (start..=end).collect()
}
