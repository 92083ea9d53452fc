pub mod cli;
pub mod error;
pub mod logging;
pub mod rename;
pub mod ui;
pub mod validator;

pub use cli::{Action, Args, ParsedCommand};
pub use error::{AppError, ExitCode};
pub use rename::{
    compute_destinations, execute, Command, ExecutionMode, ExecutionSummary, RenameError,
    RenameOperation,
};
pub use validator::{calculate_extension, ValidationError};
