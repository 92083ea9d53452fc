use std::path::PathBuf;

/// A renaming rule together with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a suffix to the full path
    Append { suffix: String },
    /// Lowercase the full path
    Lower,
    /// Move every file into `directory` as `file_NNNN<ext>`, in the given order
    Merge { directory: PathBuf },
    /// Prefix each file name with its rank in sorted order
    Order,
    /// Delete every match of a regular expression from the full path
    Remove { pattern: String },
    /// Prepend a prefix to the file name
    Prepend { prefix: String },
    /// Replace `old` with `new` in the full path
    Substitute {
        old: String,
        new: String,
        /// Only replace the first occurrence
        first_only: bool,
    },
    /// Rename files positionally from a newline-delimited title list
    Titles { input: PathBuf },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Append { .. } => "append",
            Command::Lower => "lower",
            Command::Merge { .. } => "merge",
            Command::Order => "order",
            Command::Remove { .. } => "remove",
            Command::Prepend { .. } => "prepend",
            Command::Substitute { .. } => "substitute",
            Command::Titles { .. } => "titles",
        }
    }
}

/// A single rename: `source` is moved to `destination`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl RenameOperation {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Flags applying uniformly to every operation of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionMode {
    /// Log what would happen without touching the filesystem
    pub dry_run: bool,
    /// Suppress missing-file warnings
    pub quiet: bool,
    /// Always log rename lines
    pub verbose: bool,
}

impl ExecutionMode {
    pub fn announces_renames(&self) -> bool {
        self.verbose || self.dry_run
    }
}

/// Counts gathered while executing a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Renames performed on the filesystem
    pub renamed: usize,
    /// Operations skipped because the source did not exist
    pub skipped: usize,
    /// Dry-run operations whose source exists
    pub planned: usize,
}

impl ExecutionSummary {
    pub fn total(&self) -> usize {
        self.renamed + self.skipped + self.planned
    }
}
