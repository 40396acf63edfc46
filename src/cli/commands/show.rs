//! Print a previously saved list

use std::path::Path;

use anyhow::Context;

use roster::config::RosterConfig;
use roster::output::{ListResult, OutputMode};
use roster::writer;

/// Read and print the list at `path`, or at the configured output
pub fn show(path: Option<&Path>, config: &RosterConfig, mode: OutputMode) -> anyhow::Result<()> {
    let path = path.unwrap_or(config.output.as_path());
    let students = writer::read_records(path)
        .with_context(|| format!("failed to read student list from {}", path.display()))?;

    ListResult {
        path: path.display().to_string(),
        students,
    }
    .render(mode);

    Ok(())
}
