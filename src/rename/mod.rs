mod executor;
mod rules;
mod types;

pub use executor::{execute, RenameError};
pub use rules::{compute_destinations, sequence_width};
pub use types::{Command, ExecutionMode, ExecutionSummary, RenameOperation};
