//! Testing utilities for code built on the combinators.
//!
//! - **Assertions**: compare sequences and maps with detailed failure output
//! - **Builders**: generate test sequences fluently
//! - **Debug**: dump sequences to stderr while diagnosing a failure
//! - **Fixtures**: small ready-made datasets
//!
//! # Quick Start
//!
//! ```
//! use bifold::fold;
//! use bifold::testing::*;
//!
//! let data = sequential_data(1, 3);
//! let total = fold(&data, 0, |acc, n| acc + n);
//! assert_eq!(total, 6);
//! assert_sequences_equal(&data, &[1, 2, 3]);
//! ```

pub mod assertions;
pub mod builders;
pub mod debug;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::*;
pub use builders::*;
pub use debug::*;
pub use fixtures::*;
