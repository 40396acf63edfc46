//! Error types for roster

use thiserror::Error;

/// Errors produced by the roster library
#[derive(Error, Debug)]
pub enum RosterError {
    /// A score token did not parse as a number
    #[error("Invalid input. Please enter a numeric value for GPA.")]
    NotNumeric {
        /// The rejected input, trimmed
        input: String,
    },

    /// A score parsed but lies outside the accepted range
    #[error("GPA must be between 0.0 and 4.0.")]
    OutOfRange {
        /// The rejected value
        value: f64,
    },

    /// A record name was blank
    #[error("Name cannot be empty.")]
    EmptyName,

    /// A record name contained the ", Address: " field separator
    #[error("Name cannot contain ', Address: '.")]
    ReservedName,

    /// A line of a saved list does not follow the record template
    #[error("Malformed record on line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number (0 when parsing a lone line)
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// The configuration file could not be parsed
    #[error("Invalid configuration in {path}: {source}")]
    Config {
        /// Path of the offending file
        path: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Reading input or writing output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Whether the collector can recover from this error by prompting again
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotNumeric { .. } | Self::OutOfRange { .. } | Self::EmptyName | Self::ReservedName
        )
    }
}

/// Result alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
