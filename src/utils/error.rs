use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("SQLite error: {0}")]
    SqliteError(#[from] sqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError {
            message: message.into(),
        }
    }

    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DivisionByZero | Self::Overflow { .. } => ErrorCategory::Arithmetic,
            Self::StorageError { .. } | Self::SqliteError(_) | Self::IoError(_) => {
                ErrorCategory::Storage
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 輸入與設定錯誤：重試無效，需使用者修正
            ErrorCategory::Arithmetic | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => match self {
                Self::StorageError { .. } => ErrorSeverity::Medium,
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DivisionByZero => "Cannot divide by zero".to_string(),
            Self::Overflow { operation } => {
                format!("The result of {} does not fit in a 64-bit integer", operation)
            }
            Self::StorageError { .. } | Self::SqliteError(_) | Self::IoError(_) => {
                format!("Could not persist or read data: {}", self)
            }
            _ => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Use a non-zero divisor",
            Self::Overflow { .. } => "Use smaller operands",
            Self::StorageError { .. } => "Retry the command; the store may be temporarily unavailable",
            Self::SqliteError(_) | Self::IoError(_) => {
                "Check that the database path exists and is writable"
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the configuration file and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_is_arithmetic() {
        let err = AppError::DivisionByZero;
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_input_errors_rank_below_storage_failures() {
        let overflow = AppError::overflow("add");
        let sqlite = AppError::SqliteError(sqlite::Error {
            code: Some(14),
            message: Some("unable to open database file".to_string()),
        });

        assert_eq!(overflow.severity(), ErrorSeverity::High);
        assert!(AppError::storage("busy").severity() < overflow.severity());
        assert!(overflow.severity() < sqlite.severity());
    }

    #[test]
    fn test_storage_error_is_retryable() {
        let err = AppError::storage("disk full");
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("disk full"));
    }

    #[test]
    fn test_config_errors_share_category() {
        let missing = AppError::MissingConfigError {
            field: "store.path".to_string(),
        };
        let invalid = AppError::InvalidConfigValueError {
            field: "store.backend".to_string(),
            value: "redis".to_string(),
            reason: "unsupported".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(
            invalid.to_string(),
            "Invalid value 'redis' for 'store.backend': unsupported"
        );
    }
}
