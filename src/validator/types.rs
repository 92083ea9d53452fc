use std::path::PathBuf;
use thiserror::Error;

/// Batch pre-check failures, raised before any file is renamed
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Only one extension allowed. Found: {}", .extensions.join(", "))]
    MixedExtensions { extensions: Vec<String> },

    #[error("Titles file {} does not exist", .path.display())]
    TitlesFileMissing { path: PathBuf },

    #[error("Failed to read titles file {}: {source}", .path.display())]
    TitlesFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "{} filenames ({titles}) and files length ({files}) do not match",
        .path.display()
    )]
    TitleCountMismatch {
        path: PathBuf,
        titles: usize,
        files: usize,
    },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Path has no file name: {}", .path.display())]
    MissingFileName { path: PathBuf },
}

impl ValidationError {
    pub fn format_error_message(&self) -> String {
        match self {
            ValidationError::MixedExtensions { extensions } => {
                let mut msg = String::from(
                    "All files must share a single extension (compared case-insensitively).\n\n\
                     Extensions found:\n",
                );
                for ext in extensions {
                    if ext.is_empty() {
                        msg.push_str("  - (none)\n");
                    } else {
                        msg.push_str(&format!("  - {}\n", ext));
                    }
                }
                msg
            }
            ValidationError::TitlesFileMissing { path } => {
                format!(
                    "Titles file {} does not exist.\n\n\
                     Provide a text file with one title per line.",
                    path.display()
                )
            }
            ValidationError::TitlesFileUnreadable { path, source } => {
                format!(
                    "Failed to read titles file:\n  {}\n  {}",
                    path.display(),
                    source
                )
            }
            ValidationError::TitleCountMismatch {
                path,
                titles,
                files,
            } => {
                format!(
                    "{} filenames ({}) and files length ({}) do not match.\n\n\
                     Expected one non-blank title line per file.",
                    path.display(),
                    titles,
                    files
                )
            }
            ValidationError::InvalidPattern { pattern, source } => {
                format!("Invalid pattern:\n  {}\n\n{}", pattern, source)
            }
            ValidationError::MissingFileName { path } => {
                format!(
                    "Path has no file name component:\n  {}\n\n\
                     Pass paths to files, not '..' or a root directory.",
                    path.display()
                )
            }
        }
    }
}
