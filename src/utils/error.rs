use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("Register file not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Expected <{expected}> sections, found at least <{found}>.")]
    SectionOverflow { expected: usize, found: usize },

    #[error("Expected <{expected}> parts, found <{found}> in line <{line}>.")]
    FormatError {
        expected: usize,
        found: usize,
        line: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

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
    Input,
    Format,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegisterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegisterError::FileNotFound { .. } | RegisterError::IoError(_) => ErrorCategory::Input,
            RegisterError::SectionOverflow { .. } | RegisterError::FormatError { .. } => {
                ErrorCategory::Format
            }
            RegisterError::SerializationError(_) | RegisterError::CsvError(_) => {
                ErrorCategory::Output
            }
            RegisterError::ConfigError { .. }
            | RegisterError::ConfigValidationError { .. }
            | RegisterError::InvalidConfigValueError { .. }
            | RegisterError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入檔缺失或格式錯誤，整個載入中止
            RegisterError::FileNotFound { .. }
            | RegisterError::SectionOverflow { .. }
            | RegisterError::FormatError { .. } => ErrorSeverity::High,
            RegisterError::IoError(_) => ErrorSeverity::Critical,
            RegisterError::SerializationError(_) | RegisterError::CsvError(_) => {
                ErrorSeverity::Medium
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegisterError::FileNotFound { .. } => {
                "Make sure register.txt exists in the working directory or pass --input"
            }
            RegisterError::SectionOverflow { .. } => {
                "A register has three blank-line separated sections: students, courses, enrollments"
            }
            RegisterError::FormatError { .. } => {
                "Enrollment lines must contain exactly '<id> <crn>'"
            }
            RegisterError::IoError(_) => "Check file permissions and available disk space",
            RegisterError::SerializationError(_) | RegisterError::CsvError(_) => {
                "Try the plain text report format"
            }
            _ => "Check the configuration file and command line flags",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read the register: {}", self),
            ErrorCategory::Format => format!("The register is malformed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not produce the report: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegisterError>;
