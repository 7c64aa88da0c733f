use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Catalog lookup gap: no {table} entry for {sign}")]
    LookupGap { sign: String, table: &'static str },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Catalog,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AstroError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::LookupGap { .. } => ErrorCategory::Catalog,
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Serialization,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Serialization => ErrorSeverity::High,
            // 目錄缺漏屬於程式錯誤
            ErrorCategory::Catalog => ErrorSeverity::Critical,
        }
    }

    /// The generic "bad request" signal handed to whatever transport sits in front of the core.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { message } => format!("Invalid request: {}", message),
            Self::LookupGap { sign, .. } => {
                format!("Internal error: no reading is available for {}", sign)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration is missing the '{}' field", field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            Self::ConfigValidationError { message, .. } => {
                format!("Configuration problem: {}", message)
            }
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Could not render output: {}", e),
            Self::CsvError(e) => format!("Could not render CSV output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => {
                "Provide a non-empty name and a birth date formatted as YYYY-MM-DD"
            }
            ErrorCategory::Catalog => "Report this as a bug; the sign catalog is incomplete",
            ErrorCategory::Configuration => "Check the configuration file against the documented layout",
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Serialization => "Re-run with --verbose and report the failing entry",
        }
    }
}

pub type Result<T> = std::result::Result<T, AstroError>;
