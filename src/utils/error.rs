use thiserror::Error;

/// Client-facing validation failures for `GET /cafe`.
///
/// The display text is the exact response body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown city")]
    UnknownCity,

    #[error("incorrect count")]
    InvalidCount,
}

#[derive(Error, Debug)]
pub enum CafeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    System,
}

impl CafeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CafeError::IoError(_) => ErrorCategory::System,
            CafeError::ConfigError { .. }
            | CafeError::MissingConfigError { .. }
            | CafeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::System => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CafeError::IoError(e) => format!("Server failed: {}", e),
            CafeError::ConfigError { message } => format!("Bad configuration: {}", message),
            CafeError::MissingConfigError { field } => {
                format!("Configuration is missing required field '{}'", field)
            }
            CafeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CafeError>;
