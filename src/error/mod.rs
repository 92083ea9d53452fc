mod codes;

pub use codes::ExitCode;

use crate::rename::RenameError;
use crate::validator::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Rename failed: {from} -> {to}")]
    RenameFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::Validation(_) => ExitCode::ValidationError,
            AppError::RenameFailed { .. } => ExitCode::RenameError,
            AppError::Output(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::Validation(err) => {
                format!("{}\n\nNo files were renamed.", err.format_error_message())
            }

            AppError::RenameFailed { from, to, source } => {
                format!(
                    "Failed to rename file:\n\
                     From: {}\n\
                     To:   {}\n\
                     Error: {}\n\n\
                     Remaining files were not renamed. Check permissions and \
                     that source and destination are on the same filesystem.",
                    from, to, source
                )
            }

            AppError::Output(source) => format!("Failed to write output: {}", source),
        }
    }
}

impl From<RenameError> for AppError {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::Filesystem { from, to, source } => {
                AppError::RenameFailed { from, to, source }
            }
            RenameError::Output(source) => AppError::Output(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let err = AppError::Output(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.exit_code(), ExitCode::GeneralError);

        let err: AppError = ValidationError::MixedExtensions {
            extensions: vec![".a".to_string(), ".b".to_string()],
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);

        let err = AppError::RenameFailed {
            from: "a".to_string(),
            to: "b".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), ExitCode::RenameError);
    }

    #[test]
    fn test_detailed_message_includes_context() {
        let err: AppError = ValidationError::TitleCountMismatch {
            path: PathBuf::from("titles.txt"),
            titles: 4,
            files: 3,
        }
        .into();

        let msg = err.detailed_message();
        assert!(msg.contains("titles.txt"));
        assert!(msg.contains("(4)"));
        assert!(msg.contains("(3)"));
        assert!(msg.contains("No files were renamed"));
    }

    #[test]
    fn test_rename_error_conversion() {
        let rename_err = RenameError::Filesystem {
            from: "src.txt".to_string(),
            to: "dst.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "cross-device link"),
        };
        let app_err: AppError = rename_err.into();

        assert_eq!(app_err.exit_code(), ExitCode::RenameError);
        let msg = app_err.detailed_message();
        assert!(msg.contains("src.txt"));
        assert!(msg.contains("dst.txt"));
        assert!(msg.contains("cross-device link"));
    }
}
