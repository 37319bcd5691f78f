use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefereeError {
    #[error("Prompt file not found: {}", .path.display())]
    PromptNotFound { path: PathBuf },

    #[error("Failed to read prompt file {}: {source}", .path.display())]
    PromptIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Resource,
    Configuration,
    Terminal,
}

/// Every error aborts the run; severity only picks the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RefereeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RefereeError::PromptNotFound { .. } | RefereeError::PromptIo { .. } => {
                ErrorCategory::Resource
            }
            RefereeError::ConfigValidationError { .. }
            | RefereeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RefereeError::IoError(_) => ErrorCategory::Terminal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RefereeError::PromptNotFound { .. } => ErrorSeverity::High,
            RefereeError::PromptIo { .. } => ErrorSeverity::Medium,
            RefereeError::ConfigValidationError { .. }
            | RefereeError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RefereeError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RefereeError::PromptNotFound { path } => format!(
                "Create {} or point --prompt-file at an existing file",
                path.display()
            ),
            RefereeError::PromptIo { .. } => {
                "Check the prompt file permissions and try again".to_string()
            }
            RefereeError::IoError(_) => {
                "Make sure standard input and output are available".to_string()
            }
            RefereeError::ConfigValidationError { .. } => {
                "Check the configuration file is valid TOML".to_string()
            }
            RefereeError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in your configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RefereeError::PromptNotFound { path } => {
                format!("The prompt file {} does not exist", path.display())
            }
            RefereeError::PromptIo { path, .. } => {
                format!("The prompt file {} could not be read", path.display())
            }
            RefereeError::IoError(_) => "Could not talk to the terminal".to_string(),
            RefereeError::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            RefereeError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {} ({})", value, field, reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, RefereeError>;
