use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::validator::{
    calculate_extension, compile_pattern, load_titles, require_file_names, ValidationError,
};

use super::types::{Command, RenameOperation};

/// Compute the rename operations `command` applies to `files`
///
/// Every batch-level check runs before the first operation is produced, so an
/// `Err` means nothing should be renamed. Only `Titles` touches the
/// filesystem, to read its title list.
pub fn compute_destinations(
    command: &Command,
    files: &[PathBuf],
) -> Result<Vec<RenameOperation>, ValidationError> {
    info!(
        command = command.name(),
        files = files.len(),
        "Computing destinations"
    );

    let operations = match command {
        Command::Append { suffix } => append(files, suffix),
        Command::Lower => lower(files),
        Command::Merge { directory } => merge(files, directory)?,
        Command::Order => order(files)?,
        Command::Remove { pattern } => remove(files, pattern)?,
        Command::Prepend { prefix } => prepend(files, prefix)?,
        Command::Substitute {
            old,
            new,
            first_only,
        } => substitute(files, old, new, *first_only),
        Command::Titles { input } => titles(files, input)?,
    };

    for op in &operations {
        debug!(source = ?op.source, destination = ?op.destination, "Planned rename");
    }

    Ok(operations)
}

/// Zero-padded width of sequence numbers for a batch of `count` files
pub fn sequence_width(count: usize) -> usize {
    if count < 100 {
        2
    } else {
        4
    }
}

fn append(files: &[PathBuf], suffix: &str) -> Vec<RenameOperation> {
    files
        .iter()
        .map(|file| {
            let mut destination = file.as_os_str().to_os_string();
            destination.push(suffix);
            RenameOperation::new(file, destination)
        })
        .collect()
}

fn lower(files: &[PathBuf]) -> Vec<RenameOperation> {
    files
        .iter()
        .map(|file| RenameOperation::new(file, file.to_string_lossy().to_lowercase()))
        .collect()
}

fn prepend(files: &[PathBuf], prefix: &str) -> Result<Vec<RenameOperation>, ValidationError> {
    require_file_names(files)?;

    Ok(files
        .iter()
        .map(|file| {
            let name = format!("{}{}", prefix, file_name(file));
            RenameOperation::new(file, sibling(file, name))
        })
        .collect())
}

fn substitute(files: &[PathBuf], old: &str, new: &str, first_only: bool) -> Vec<RenameOperation> {
    files
        .iter()
        .map(|file| {
            let path = file.to_string_lossy();
            let destination = if first_only {
                path.replacen(old, new, 1)
            } else {
                path.replace(old, new)
            };
            RenameOperation::new(file, destination)
        })
        .collect()
}

fn remove(files: &[PathBuf], pattern: &str) -> Result<Vec<RenameOperation>, ValidationError> {
    let regex = compile_pattern(pattern)?;

    Ok(files
        .iter()
        .map(|file| {
            let path = file.to_string_lossy();
            RenameOperation::new(file, regex.replace_all(&path, "").into_owned())
        })
        .collect())
}

fn order(files: &[PathBuf]) -> Result<Vec<RenameOperation>, ValidationError> {
    require_file_names(files)?;

    let width = sequence_width(files.len());

    // Sort as strings, not component-wise
    let mut sorted: Vec<&PathBuf> = files.iter().collect();
    sorted.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    Ok(sorted
        .into_iter()
        .enumerate()
        .map(|(i, file)| {
            let name = format!("{:0width$} - {}", i + 1, file_name(file), width = width);
            RenameOperation::new(file, sibling(file, name))
        })
        .collect())
}

fn merge(files: &[PathBuf], directory: &Path) -> Result<Vec<RenameOperation>, ValidationError> {
    let extension = calculate_extension(files)?;

    Ok(files
        .iter()
        .enumerate()
        .map(|(i, file)| {
            let name = format!("file_{:04}{}", i + 1, extension);
            RenameOperation::new(file, directory.join(name))
        })
        .collect())
}

fn titles(files: &[PathBuf], input: &Path) -> Result<Vec<RenameOperation>, ValidationError> {
    let extension = calculate_extension(files)?;
    let titles = load_titles(input, files.len())?;
    let width = sequence_width(files.len());

    Ok(files
        .iter()
        .zip(titles.iter())
        .enumerate()
        .map(|(i, (file, title))| {
            let name = format!(
                "{:0width$} - {}{}",
                i + 1,
                title,
                extension,
                width = width
            );
            RenameOperation::new(file, sibling(file, name))
        })
        .collect())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_else(|| OsStr::new(""))
        .to_string_lossy()
        .into_owned()
}

/// `name` placed in the same directory as `path`
fn sibling(path: &Path, name: String) -> PathBuf {
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
