mod types;

pub use types::*;

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Lowercased extension of `path` including the leading dot, or `""` if it has none
///
/// Leading dots of the file name never start an extension, so `.bashrc` and
/// `..foo` have none while `file.` has `"."`.
pub fn lowercase_extension(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };

    let stem = name.trim_start_matches('.');
    stem.rfind('.')
        .map(|i| stem[i..].to_lowercase())
        .unwrap_or_default()
}

/// Determine the single extension shared by every file
///
/// Extensions are compared case-insensitively. Files without an extension
/// contribute `""`, so a batch of extensionless files yields `""`.
pub fn calculate_extension<P: AsRef<Path>>(files: &[P]) -> Result<String, ValidationError> {
    let extensions: BTreeSet<String> = files
        .iter()
        .map(|f| lowercase_extension(f.as_ref()))
        .collect();

    if extensions.len() > 1 {
        warn!(count = extensions.len(), "Mixed extensions detected");
        return Err(ValidationError::MixedExtensions {
            extensions: extensions.into_iter().collect(),
        });
    }

    let extension = extensions.into_iter().next().unwrap_or_default();
    debug!(extension = %extension, "Extension check passed");
    Ok(extension)
}

/// Split title list text into titles: lines are trimmed and blank lines dropped
pub fn parse_titles(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read the title list at `path` and check it holds exactly `expected` titles
pub fn load_titles(path: &Path, expected: usize) -> Result<Vec<String>, ValidationError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ValidationError::TitlesFileMissing {
                path: path.to_path_buf(),
            }
        } else {
            ValidationError::TitlesFileUnreadable {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let titles = parse_titles(&content);

    if titles.len() != expected {
        warn!(
            titles = titles.len(),
            files = expected,
            "Title count does not match file count"
        );
        return Err(ValidationError::TitleCountMismatch {
            path: path.to_path_buf(),
            titles: titles.len(),
            files: expected,
        });
    }

    info!(count = titles.len(), path = ?path, "Loaded titles");
    Ok(titles)
}

/// Compile a user supplied removal pattern
pub fn compile_pattern(pattern: &str) -> Result<Regex, ValidationError> {
    Regex::new(pattern).map_err(|source| ValidationError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Check every path ends in a file name component
pub fn require_file_names(files: &[PathBuf]) -> Result<(), ValidationError> {
    match files.iter().find(|f| f.file_name().is_none()) {
        Some(path) => Err(ValidationError::MissingFileName { path: path.clone() }),
        None => Ok(()),
    }
}
