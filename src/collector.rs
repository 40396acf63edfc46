//! Interactive record collection
//!
//! The collector is a small state machine pulled forward one line at a time:
//!
//! ```text
//! AwaitName --name--> AwaitAddress --address--> AwaitScore --valid score--> AwaitName
//!     |                                             |
//!   "done" / end of input                      invalid score (re-prompt)
//!     v
//!   Done
//! ```
//!
//! Prompts and validation messages go to the console writer, so the same
//! logic runs against a terminal or against scripted input in tests.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::mem;

use crate::error::{Result, RosterError};
use crate::models::{Score, Student};

/// Name input that ends collection (compared case-insensitively)
pub const SENTINEL: &str = "done";

/// Printed once before the first prompt
pub const BANNER: &str = "Enter student data. Type 'done' when finished.";
/// Prompt for the name field
pub const NAME_PROMPT: &str = "Enter student's name (or 'done' to finish): ";
/// Prompt for the address field
pub const ADDRESS_PROMPT: &str = "Enter student's address: ";
/// Prompt for the score field
pub const SCORE_PROMPT: &str = "Enter student's GPA (0.0 - 4.0): ";

/// A pull-based source of input lines
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of input
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

// Invalid UTF-8 is replaced with U+FFFD rather than failing the whole session
impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            log::warn!("input line was not valid UTF-8; invalid bytes replaced");
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Where the collector is in the current record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum State {
    /// Waiting for a name (or the sentinel)
    #[default]
    AwaitName,
    /// Name accepted, waiting for the address
    AwaitAddress {
        /// Accepted name
        name: String,
    },
    /// Name and address accepted, waiting for a valid score
    AwaitScore {
        /// Accepted name
        name: String,
        /// Accepted address
        address: String,
    },
    /// Sentinel seen or input exhausted
    Done,
}

/// Drives the collection state machine over a line source
#[derive(Debug)]
pub struct Collector<S, W> {
    source: S,
    console: W,
    state: State,
    rejected: usize,
}

impl<S: LineSource, W: Write> Collector<S, W> {
    /// Create a collector in the `AwaitName` state
    pub fn new(source: S, console: W) -> Self {
        Self {
            source,
            console,
            state: State::AwaitName,
            rejected: 0,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Number of inputs rejected so far
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    /// Whether collection has finished
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Advance by one prompt/read cycle
    ///
    /// Returns the record completed by this step, if any.
    pub fn step(&mut self) -> Result<Option<Student>> {
        match mem::replace(&mut self.state, State::Done) {
            State::AwaitName => {
                let Some(line) = self.prompt(NAME_PROMPT)? else {
                    log::debug!("input closed while waiting for a name");
                    return Ok(None);
                };
                if line.trim().eq_ignore_ascii_case(SENTINEL) {
                    log::debug!("sentinel received, collection finished");
                    return Ok(None);
                }
                match Student::check_name(&line) {
                    Ok(name) => {
                        self.state = State::AwaitAddress {
                            name: name.to_string(),
                        };
                    },
                    Err(e) => {
                        self.reject(&e)?;
                        self.state = State::AwaitName;
                    },
                }
                Ok(None)
            },
            State::AwaitAddress { name } => {
                if let Some(address) = self.prompt(ADDRESS_PROMPT)? {
                    self.state = State::AwaitScore { name, address };
                } else {
                    log::warn!("input closed before an address was entered; discarding '{name}'");
                }
                Ok(None)
            },
            State::AwaitScore { name, address } => {
                let Some(line) = self.prompt(SCORE_PROMPT)? else {
                    log::warn!("input closed before a GPA was entered; discarding '{name}'");
                    return Ok(None);
                };
                match line.parse::<Score>() {
                    Ok(score) => {
                        let student = Student::new(name, address, score)?;
                        log::debug!("collected {student}");
                        self.state = State::AwaitName;
                        Ok(Some(student))
                    },
                    Err(e) if e.is_recoverable() => {
                        self.reject(&e)?;
                        self.state = State::AwaitScore { name, address };
                        Ok(None)
                    },
                    Err(e) => Err(e),
                }
            },
            State::Done => Ok(None),
        }
    }

    /// Run until done, appending every completed record to `students`
    ///
    /// Returns the number of records appended.
    pub fn collect_into(&mut self, students: &mut Vec<Student>) -> Result<usize> {
        writeln!(self.console, "{BANNER}")?;
        let before = students.len();
        while !self.is_done() {
            if let Some(student) = self.step()? {
                students.push(student);
            }
        }
        Ok(students.len() - before)
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.console, "{prompt}")?;
        self.console.flush()?;
        Ok(self.source.next_line()?)
    }

    fn reject(&mut self, error: &RosterError) -> Result<()> {
        self.rejected += 1;
        log::debug!("rejected input: {error:?}");
        writeln!(self.console, "{error}")?;
        Ok(())
    }
}

/// Collect records from `source` until the sentinel or end of input
pub fn collect<S: LineSource, W: Write>(source: S, console: W) -> Result<Vec<Student>> {
    let mut students = Vec::new();
    Collector::new(source, console).collect_into(&mut students)?;
    Ok(students)
}
