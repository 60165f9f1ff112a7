//! Configuration error types.

use std::path::PathBuf;

/// Every failure the accessor or its collaborators can signal.
///
/// An absent option is never an error; it resolves to the caller's default.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("configuration file {} does not exist", path.display())]
    MissingFile { path: PathBuf },

    #[error("config parse error in {file}: {reason}")]
    Parse { file: String, reason: String },

    #[error("invalid config value [{section}] {option}: {value:?} is not an integer")]
    InvalidInteger {
        section: String,
        option: String,
        value: String,
    },

    #[error("invalid config value [{section}] {option}: {value:?} is neither yes nor no")]
    InvalidYesNo {
        section: String,
        option: String,
        value: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConfigurationError {
    /// Process exit status an entry point should use for this error.
    pub fn exit_status(&self) -> u8 {
        match self {
            ConfigurationError::MissingFile { .. } => 1,
            ConfigurationError::Parse { .. } | ConfigurationError::Io(_) => 2,
            ConfigurationError::InvalidInteger { .. }
            | ConfigurationError::InvalidYesNo { .. } => 3,
        }
    }
}

impl From<&ConfigurationError> for std::process::ExitCode {
    fn from(err: &ConfigurationError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
