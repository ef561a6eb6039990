//! Typed error values shared by the combinators and the record type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned by selection over a zero-length sequence.
///
/// Selection has no seed to fall back on, and the element type is
/// unconstrained, so there is no safe sentinel value; an empty input must
/// surface as its own error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot select from an empty sequence")
    }
}

impl std::error::Error for EmptyInputError {}

/// Error raised when a record is constructed without a required attribute.
///
/// Raised eagerly at construction time, never deferred to an accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingAttributeError {
    attribute: String,
}

impl MissingAttributeError {
    /// Create an error naming the absent attribute.
    pub fn new<S: Into<String>>(attribute: S) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    /// The name of the attribute that was absent.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

impl fmt::Display for MissingAttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "required attribute '{}' is missing", self.attribute)
    }
}

impl std::error::Error for MissingAttributeError {}
