use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Processing,
}

impl ScrubError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ScrubError::IoError(_) => ErrorSeverity::Critical,
            ScrubError::PatternError(_) => ErrorSeverity::Medium,
            ScrubError::ConfigValidationError { .. } => ErrorSeverity::Medium,
            ScrubError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            ScrubError::MissingConfigError { .. } => ErrorSeverity::Medium,
            ScrubError::SerializationError(_) => ErrorSeverity::High,
            ScrubError::ProcessingError { .. } => ErrorSeverity::High,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrubError::IoError(_) => ErrorCategory::Io,
            ScrubError::PatternError(_)
            | ScrubError::ConfigValidationError { .. }
            | ScrubError::InvalidConfigValueError { .. }
            | ScrubError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ScrubError::SerializationError(_) | ScrubError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScrubError::IoError(_) => {
                "Check that the project file exists and is readable/writable".to_string()
            }
            ScrubError::PatternError(_) => {
                "Fix the deletion rule's regular expression".to_string()
            }
            ScrubError::ConfigValidationError { field, .. }
            | ScrubError::InvalidConfigValueError { field, .. }
            | ScrubError::MissingConfigError { field } => {
                format!("Review the '{}' setting in your configuration", field)
            }
            ScrubError::SerializationError(_) => {
                "Check the report output path and available disk space".to_string()
            }
            ScrubError::ProcessingError { .. } => {
                "Check that the target file is a text-format project descriptor".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrubError::IoError(e) => format!("File access failed: {}", e),
            ScrubError::PatternError(e) => format!("A deletion rule is not a valid pattern: {}", e),
            ScrubError::SerializationError(e) => format!("Could not write the report: {}", e),
            ScrubError::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            ScrubError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration value '{}' is not valid for {}", value, field)
            }
            ScrubError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            ScrubError::ProcessingError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_critical() {
        let err = ScrubError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_config_errors_are_medium() {
        let err = ScrubError::MissingConfigError {
            field: "rules".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("rules"));
    }
}
