use cardmark_core::{CoreError, GenerationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] cardmark_core::ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("command error: {0}")]
    Command(String),

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Core(CoreError::Validation(_)) => 2,
            Self::Core(CoreError::Serialization(_)) => 4,
            Self::Command(_) => 2,
            Self::StrictModeViolation { .. } => 5,
            Self::Serialization(_) => 4,
            Self::Generation(GenerationError::MissingCredential { .. }) => 7,
            Self::Generation(_) => 6,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_has_its_own_exit_code() {
        let missing = CliError::from(GenerationError::MissingCredential {
            variable: "API_KEY",
        });
        let status = CliError::from(GenerationError::Status {
            status: 500,
            message: String::from("internal"),
        });
        assert_eq!(missing.exit_code(), 7);
        assert_eq!(status.exit_code(), 6);
        assert!(missing.to_string().contains("API_KEY"));
    }
}
