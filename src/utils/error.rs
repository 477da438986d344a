use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Participant source not found: {path}")]
    SourceNotFound { path: String },

    #[error("Participant source is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    #[error("Participant list is empty")]
    EmptyParticipants,

    #[error("Tier bounds must satisfy 0 <= A <= B <= C, got A={a}, B={b}, C={c}")]
    InvalidTierBounds { a: usize, b: usize, c: usize },

    #[error("Requested {requested} winners but only {available} participants were loaded")]
    InsufficientParticipants { requested: usize, available: usize },

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
    Source,
    Configuration,
    Draw,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DrawError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DrawError::SourceNotFound { .. }
            | DrawError::InvalidEncoding { .. }
            | DrawError::EmptyParticipants => ErrorCategory::Source,
            DrawError::InvalidTierBounds { .. } | DrawError::InsufficientParticipants { .. } => {
                ErrorCategory::Draw
            }
            DrawError::ConfigValidationError { .. }
            | DrawError::InvalidConfigValueError { .. }
            | DrawError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DrawError::IoError(_) | DrawError::CsvError(_) | DrawError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸出階段失敗時抽獎結果已經算出，重跑即可重現
            DrawError::CsvError(_) | DrawError::SerializationError(_) => ErrorSeverity::Medium,
            DrawError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DrawError::SourceNotFound { path } => {
                format!("Check that '{}' exists and is readable", path)
            }
            DrawError::InvalidEncoding { .. } => {
                "Save the participant file as UTF-8 text, one UID per line".to_string()
            }
            DrawError::EmptyParticipants => {
                "Make sure the participant file contains at least one integer UID".to_string()
            }
            DrawError::InvalidTierBounds { .. } => {
                "Adjust the tier bounds so that 0 <= A <= B <= C".to_string()
            }
            DrawError::InsufficientParticipants { available, .. } => {
                format!("Lower C to at most {} or add more participants", available)
            }
            DrawError::ConfigValidationError { field, .. }
            | DrawError::InvalidConfigValueError { field, .. }
            | DrawError::MissingConfigError { field } => {
                format!("Review the '{}' setting in the CLI flags or TOML file", field)
            }
            DrawError::IoError(_) => "Check file permissions and available disk space".to_string(),
            DrawError::CsvError(_) | DrawError::SerializationError(_) => {
                "Re-run the draw with a different output path".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Source => format!("Could not load participants: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Draw => format!("Draw rejected: {}", self),
            ErrorCategory::Output => format!("Could not write the result: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DrawError>;
