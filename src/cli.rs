use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::rename::{Command, ExecutionMode};

#[derive(Parser, Debug)]
#[command(name = "chname")]
#[command(author, version, about, long_about = None)]
#[command(about = "Batch-rename files with simple transformation rules")]
#[command(subcommand_required = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub mode: ModeArgs,
}

/// Flags shared by every renaming command
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct ModeArgs {
    /// Show what would be done, but don't actually do it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Don't report files that do not exist
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Report every rename (repeat to raise log level: -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<ModeArgs> for ExecutionMode {
    fn from(args: ModeArgs) -> Self {
        ExecutionMode {
            dry_run: args.dry_run,
            quiet: args.quiet,
            verbose: args.verbose > 0,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a suffix to each file
    Append {
        suffix: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Translate file paths to lowercase
    Lower {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Merge files into one directory as file_0001.ext, file_0002.ext, ...
    Merge {
        directory: PathBuf,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Add a numerical prefix to the sorted files
    Order {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Remove a regular expression pattern from each file path
    Remove {
        pattern: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Prepend a prefix to each file name
    Prepend {
        prefix: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Substitute text in each file path
    Substitute {
        /// Only replace the first occurrence
        #[arg(long)]
        first: bool,
        old: String,
        new: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Name files from a text file with one title per line
    Titles {
        input: PathBuf,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show detailed usage with examples
    Usage,
}

/// A fully parsed renaming request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: Command,
    pub files: Vec<PathBuf>,
    pub mode: ExecutionMode,
}

/// What the binary should do after argument parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Usage,
    Rename(ParsedCommand),
}

impl Args {
    pub fn into_action(self) -> Action {
        let mode = ExecutionMode::from(self.mode);

        let (command, files) = match self.command {
            Commands::Append { suffix, files } => (Command::Append { suffix }, files),
            Commands::Lower { files } => (Command::Lower, files),
            Commands::Merge { directory, files } => (Command::Merge { directory }, files),
            Commands::Order { files } => (Command::Order, files),
            Commands::Remove { pattern, files } => (Command::Remove { pattern }, files),
            Commands::Prepend { prefix, files } => (Command::Prepend { prefix }, files),
            Commands::Substitute {
                first,
                old,
                new,
                files,
            } => (
                Command::Substitute {
                    old,
                    new,
                    first_only: first,
                },
                files,
            ),
            Commands::Titles { input, files } => (Command::Titles { input }, files),
            Commands::Usage => return Action::Usage,
        };

        Action::Rename(ParsedCommand {
            command,
            files,
            mode,
        })
    }
}

const USAGE_DETAILS: &str = "\
Merge
-----
Moves files from any number of directories into one directory:

    chname merge out d1/* d2/*

Input files: d1/file1.txt d1/file2.txt d2/file1.txt
Results:     out/file_0001.txt out/file_0002.txt out/file_0003.txt

Files are numbered in the order given. All of the files must have the same
extension (compared case-insensitively). The filename format is
file_NUMBER.extension.

Order
-----
Adds a numerical prefix to the sorted input files:

    chname order filea.mp3 fileb.mp3

becomes:

    01 - filea.mp3
    02 - fileb.mp3

Numbers have two digits for fewer than 100 files, four digits otherwise.

Titles
------
Renames files from a text file holding one title per line (blank lines are
ignored). The number of titles must match the number of files:

    chname titles titles.txt a.mp3 b.mp3

with titles.txt containing \"Song One\" and \"Song Two\" becomes:

    01 - Song One.mp3
    02 - Song Two.mp3
";

/// Long help followed by worked examples for the numbering commands
pub fn usage_text() -> String {
    let help = Args::command().render_long_help();
    format!("{}\n{}", help, USAGE_DETAILS)
}
