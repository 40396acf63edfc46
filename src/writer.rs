//! Saving and loading student lists
//!
//! A list file holds one [`Student`] per line in its `Display` form:
//!
//! ```text
//! Name: Alice, Address: 2 St, GPA: 4.0
//! Name: bob, Address: 1 St, GPA: 3.0
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, RosterError};
use crate::models::Student;

/// Default destination, relative to the current directory
pub const DEFAULT_OUTPUT: &str = "StudentList.txt";

/// Platform line separator used between records
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Render records, one line each, to any writer
pub fn render<W: Write>(students: &[Student], out: &mut W) -> io::Result<()> {
    for student in students {
        write!(out, "{student}{LINE_ENDING}")?;
    }
    Ok(())
}

/// Write records to `path`, replacing any existing content
///
/// The file handle is closed when this returns, on success and on error. A
/// failed write can leave a truncated file behind.
pub fn write_records(students: &[Student], path: &Path) -> Result<()> {
    log::debug!("writing {} record(s) to {}", students.len(), path.display());
    let mut out = BufWriter::new(File::create(path)?);
    render(students, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Read a list previously saved with [`write_records`]
///
/// Blank lines are skipped. The first malformed line aborts the read.
pub fn read_records(path: &Path) -> Result<Vec<Student>> {
    let content = fs::read_to_string(path)?;
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.parse::<Student>().map_err(|e| match e {
                RosterError::MalformedLine { reason, .. } => RosterError::MalformedLine {
                    line: index + 1,
                    reason,
                },
                other => other,
            })
        })
        .collect()
}
