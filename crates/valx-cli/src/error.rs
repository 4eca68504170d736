use thiserror::Error;
use valx_core::CoreError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] valx_core::ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("strict mode failed: warnings={warning_count}")]
    StrictModeViolation { warning_count: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Core(
                CoreError::Validation(_)
                | CoreError::Csv(_)
                | CoreError::MalformedInput { .. }
                | CoreError::Spreadsheet { .. },
            ) => 2,
            Self::Serialization(_) => 4,
            Self::StrictModeViolation { .. } => 5,
            Self::Core(CoreError::Io { .. }) | Self::Io(_) => 10,
        }
    }
}
