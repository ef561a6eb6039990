//! A validated value object for exercising the combinators with a
//! non-primitive element type.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::MissingAttributeError;

/// A named entity with a salary.
///
/// Both attributes are required: [`Developer::new`] rejects an absent one
/// immediately, naming it. Once built the record is immutable and the
/// accessors are plain projections. The salary is stored as a totally
/// ordered float so the record derives `Eq` and `Hash` and can itself key a
/// map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Developer {
    name: String,
    salary: OrderedFloat<f64>,
}

impl Developer {
    /// Build a record from optional attribute values.
    ///
    /// # Errors
    ///
    /// Returns [`MissingAttributeError`] naming the first absent attribute.
    ///
    /// # Example
    /// ```
    /// use bifold::Developer;
    ///
    /// let dev = Developer::new(Some("Sara"), Some(780_000.0))?;
    /// assert_eq!(dev.name(), "Sara");
    ///
    /// let missing = Developer::new(None, Some(780_000.0));
    /// assert_eq!(missing.unwrap_err().attribute(), "name");
    /// # Ok::<(), bifold::MissingAttributeError>(())
    /// ```
    pub fn new(name: Option<&str>, salary: Option<f64>) -> Result<Self, MissingAttributeError> {
        let name = name.ok_or_else(|| MissingAttributeError::new("name"))?;
        let salary = salary.ok_or_else(|| MissingAttributeError::new("salary"))?;
        Ok(Self {
            name: name.to_string(),
            salary: OrderedFloat(salary),
        })
    }

    /// The developer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The developer's salary.
    pub fn salary(&self) -> f64 {
        self.salary.into_inner()
    }
}
