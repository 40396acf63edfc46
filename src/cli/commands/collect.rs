//! Collect students interactively, sort them, and save the list

use std::io::{self, Write};

use anyhow::Context;

use crate::cli::app::CollectArgs;
use roster::config::RosterConfig;
use roster::output::{OutputMode, SaveResult};
use roster::{collector, sort, writer};

/// Run the collect, sort, save pipeline
pub fn collect(args: &CollectArgs, config: &RosterConfig, mode: OutputMode) -> anyhow::Result<()> {
    let path = args.output.clone().unwrap_or_else(|| config.output.clone());
    let strict = args.strict || config.strict;

    // Keep stdout clean for the JSON summary
    let console: Box<dyn Write> = match mode {
        OutputMode::Human => Box::new(io::stdout().lock()),
        OutputMode::Json => Box::new(io::stderr().lock()),
    };

    let mut students =
        collector::collect(io::stdin().lock(), console).context("failed to read student data")?;
    sort::sort_by_name(&mut students);
    debug_assert!(sort::is_sorted_by_name(&students));

    let result = match writer::write_records(&students, &path) {
        Ok(()) => SaveResult::saved(&path, students.len()),
        Err(e) => {
            log::debug!("save failed: {e:?}");
            SaveResult::failed(&path, students.len(), &e)
        },
    };
    result.render(mode);

    if strict && !result.success {
        anyhow::bail!("student list was not saved to {}", path.display());
    }

    Ok(())
}
