//! Output formatting for human and JSON modes
//!
//! Result types here can be rendered either as human-readable text or as
//! machine-parseable JSON.

use std::io::{self, IsTerminal};
use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::models::Student;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Outcome of saving the sorted list
#[derive(Debug, Serialize)]
pub struct SaveResult {
    /// Whether the file was written completely
    pub success: bool,
    /// Destination path
    pub path: String,
    /// Number of records in the list
    pub records: usize,
    /// Status line shown to the user
    pub message: String,
}

impl SaveResult {
    /// A successful save
    #[must_use]
    pub fn saved(path: &Path, records: usize) -> Self {
        let path = path.display().to_string();
        Self {
            success: true,
            message: format!("Student list successfully saved to {path}"),
            path,
            records,
        }
    }

    /// A failed save
    #[must_use]
    pub fn failed(path: &Path, records: usize, error: &dyn std::error::Error) -> Self {
        Self {
            success: false,
            path: path.display().to_string(),
            records,
            message: format!("An error occurred while writing to the file: {error}"),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.success {
                    if io::stdout().is_terminal() {
                        println!("{}", self.message.green());
                    } else {
                        println!("{}", self.message);
                    }
                } else if io::stderr().is_terminal() {
                    eprintln!("{}", self.message.red());
                } else {
                    eprintln!("{}", self.message);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Contents of a saved list
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// File the records came from
    pub path: String,
    /// Records in file order
    pub students: Vec<Student>,
}

impl ListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.students.is_empty() {
            println!("No students found in {}.", self.path);
            return;
        }

        for student in &self.students {
            println!("{student}");
        }
        println!("\n{} student(s) in {}", self.students.len().to_string().bold(), self.path);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
