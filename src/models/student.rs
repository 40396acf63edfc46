//! Student record
//!
//! A `Student` is immutable once built. Its `Display` output is the line
//! format used in saved lists, and `FromStr` reads that line back.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::Score;
use crate::error::{Result, RosterError};

const NAME_PREFIX: &str = "Name: ";
const ADDRESS_SEPARATOR: &str = ", Address: ";
const GPA_SEPARATOR: &str = ", GPA: ";

/// One validated student record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    name: String,
    address: String,
    #[serde(rename = "gpa")]
    score: Score,
}

impl Student {
    /// Create a record; the name is trimmed and must pass [`Student::check_name`]
    pub fn new(name: impl Into<String>, address: impl Into<String>, score: Score) -> Result<Self> {
        let name = name.into();
        let name = Self::check_name(&name)?;
        Ok(Self {
            name: name.to_string(),
            address: address.into(),
            score,
        })
    }

    /// Trim a candidate name and check it can be saved and read back
    ///
    /// A name must not be blank and must not contain the address separator,
    /// which would make the saved line split in the wrong place.
    pub fn check_name(name: &str) -> Result<&str> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Err(RosterError::EmptyName)
        } else if trimmed.contains(ADDRESS_SEPARATOR) {
            Err(RosterError::ReservedName)
        } else {
            Ok(trimmed)
        }
    }

    /// Student's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Student's address
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Student's GPA
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Case-insensitive ordering key
    #[must_use]
    pub fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{NAME_PREFIX}{}{ADDRESS_SEPARATOR}{}{GPA_SEPARATOR}{}",
            self.name, self.address, self.score
        )
    }
}

impl FromStr for Student {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: &str| RosterError::MalformedLine {
            line: 0,
            reason: reason.to_string(),
        };

        let rest = s.strip_prefix(NAME_PREFIX).ok_or_else(|| malformed("missing 'Name: ' prefix"))?;
        let (name, tail) = rest
            .split_once(ADDRESS_SEPARATOR)
            .ok_or_else(|| malformed("missing address field"))?;
        let (address, score) = tail
            .rsplit_once(GPA_SEPARATOR)
            .ok_or_else(|| malformed("missing GPA field"))?;

        let score: Score = score.parse().map_err(|e: RosterError| malformed(&e.to_string()))?;
        Self::new(name, address, score).map_err(|e| malformed(&e.to_string()))
    }
}
