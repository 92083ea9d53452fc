use std::fs;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, info};

use super::types::{ExecutionMode, ExecutionSummary, RenameOperation};

/// Errors that abort a batch while it is being applied
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Failed to rename '{from}' to '{to}': {source}")]
    Filesystem {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Apply `operations` strictly in order
///
/// A missing source is reported on `err` (unless quiet) and skipped. The first
/// failed rename aborts the remaining batch.
pub fn execute(
    operations: &[RenameOperation],
    mode: ExecutionMode,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExecutionSummary, RenameError> {
    let mut summary = ExecutionSummary::default();

    for op in operations {
        if mode.announces_renames() {
            writeln!(
                out,
                "Renaming {} to {}",
                op.source.display(),
                op.destination.display()
            )?;
        }

        if !op.source.exists() {
            debug!(source = ?op.source, "Source does not exist, skipping");
            if !mode.quiet {
                writeln!(err, "File {} does not exist", op.source.display())?;
            }
            summary.skipped += 1;
            continue;
        }

        if mode.dry_run {
            summary.planned += 1;
            continue;
        }

        fs::rename(&op.source, &op.destination).map_err(|e| RenameError::Filesystem {
            from: op.source.display().to_string(),
            to: op.destination.display().to_string(),
            source: e,
        })?;

        debug!(source = ?op.source, destination = ?op.destination, "Renamed");
        summary.renamed += 1;
    }

    info!(
        total = summary.total(),
        renamed = summary.renamed,
        skipped = summary.skipped,
        planned = summary.planned,
        dry_run = mode.dry_run,
        "Batch complete"
    );

    Ok(summary)
}
