//! Validated GPA score

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, RosterError};

/// A GPA value in the inclusive range [`Score::MIN`, `Score::MAX`]
///
/// The only way to obtain a `Score` is through [`Score::new`] or parsing,
/// both of which reject out-of-range and non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Lowest accepted score
    pub const MIN: f64 = 0.0;
    /// Highest accepted score
    pub const MAX: f64 = 4.0;

    /// Validate a raw value
    pub fn new(value: f64) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RosterError::OutOfRange { value })
        }
    }

    /// The underlying value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Score {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let value: f64 = input.parse().map_err(|_| RosterError::NotNumeric {
            input: input.to_string(),
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Score {
    // Debug formatting keeps a fractional digit on whole numbers ("4.0", not "4")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
