use thiserror::Error;

#[derive(Error, Debug)]
pub enum CupError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Upstream {endpoint} answered with status {status}")]
    UpstreamStatus { endpoint: String, status: u16 },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration '{field}'")]
    MissingConfigError { field: String },

    #[error("Invalid argument '{field}' = '{value}': {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Data,
}

impl CupError {
    pub fn invalid_argument(field: &str, value: impl ToString, reason: &str) -> Self {
        CupError::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CupError::ApiError(_) | CupError::UpstreamStatus { .. } => ErrorCategory::Network,
            CupError::ConfigValidationError { .. }
            | CupError::InvalidConfigValueError { .. }
            | CupError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CupError::InvalidArgument { .. } => ErrorCategory::Input,
            CupError::IoError(_) | CupError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    /// Process exit code used by the binaries.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => 1,
            ErrorCategory::Network | ErrorCategory::Data => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CupError::ApiError(_) | CupError::UpstreamStatus { .. } => {
                "Could not reach the cocktail database.".to_string()
            }
            CupError::InvalidArgument { field, reason, .. } => {
                format!("Please check '{}': {}", field, reason)
            }
            CupError::MissingConfigError { field } => {
                format!("Setting '{}' is required.", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the --api-endpoint value, then retry",
            ErrorCategory::Configuration => "Fix the reported setting in your flags or TOML file",
            ErrorCategory::Input => "Enter a positive number and at least one alcohol",
            ErrorCategory::Data => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CupError>;
