use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File '{path}' is not valid UTF-8 text")]
    EncodingError { path: String },

    #[error("Input error: {message}")]
    InputError { message: String },

    #[error("File '{path}' already exists and overwrite is disabled")]
    FileExistsError { path: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl TallyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TallyError::IoError(_)
            | TallyError::EncodingError { .. }
            | TallyError::FileExistsError { .. } => ErrorCategory::Io,
            TallyError::InputError { .. } => ErrorCategory::Input,
            TallyError::SerializationError(_) | TallyError::CsvError(_) => ErrorCategory::Output,
            TallyError::ConfigError { .. }
            | TallyError::ConfigValidationError { .. }
            | TallyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TallyError::InputError { .. } | TallyError::FileExistsError { .. } => {
                ErrorSeverity::Medium
            }
            TallyError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TallyError::IoError(e) => format!("Could not access the text file: {}", e),
            TallyError::EncodingError { path } => {
                format!("The file '{}' does not contain readable text", path)
            }
            TallyError::InputError { message } => format!("Could not read the entered text: {}", message),
            TallyError::FileExistsError { path } => {
                format!("Refusing to overwrite existing file '{}'", path)
            }
            TallyError::SerializationError(_) | TallyError::CsvError(_) => {
                "Could not render the report".to_string()
            }
            TallyError::ConfigError { .. }
            | TallyError::ConfigValidationError { .. }
            | TallyError::InvalidConfigValueError { .. } => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TallyError::IoError(_) => "Check that the path exists and is writable",
            TallyError::EncodingError { .. } => "Save the file as UTF-8 and try again",
            TallyError::InputError { .. } => "Type a line of text, or pass it with --text",
            TallyError::FileExistsError { .. } => {
                "Choose another --file or drop --no-clobber to overwrite"
            }
            TallyError::SerializationError(_) | TallyError::CsvError(_) => {
                "Try the default text output format"
            }
            TallyError::ConfigError { .. }
            | TallyError::ConfigValidationError { .. }
            | TallyError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
