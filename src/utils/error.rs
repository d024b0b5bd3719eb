use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid substitution pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration validation error in '{field}': {message}")]
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

/// 錯誤分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Pattern,
    Configuration,
}

/// 錯誤嚴重程度，決定 CLI 退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FixError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FixError::IoError(_) => ErrorCategory::Io,
            FixError::PatternError(_) => ErrorCategory::Pattern,
            FixError::ConfigValidationError { .. }
            | FixError::InvalidConfigValueError { .. }
            | FixError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者修正設定後即可重跑
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            // 前面的檔案可能已經被覆寫
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Pattern => ErrorSeverity::Critical,
        }
    }

    /// CLI 退出碼：設定錯誤 2，檔案處理錯誤 1，規則本身有問題 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FixError::IoError(e) => match e.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied while rewriting a file: {}", e)
                }
                std::io::ErrorKind::InvalidData => {
                    format!("A target file is not valid UTF-8 text: {}", e)
                }
                _ => format!("File operation failed: {}", e),
            },
            FixError::PatternError(e) => format!("A rewrite rule failed to compile: {}", e),
            FixError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            FixError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            FixError::MissingConfigError { field } => {
                format!("Required configuration '{}' is missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FixError::IoError(_) => {
                "Check file permissions and encoding; files listed before the failing one may already be rewritten"
            }
            FixError::PatternError(_) => "This is a bug in the rule set, please report it",
            FixError::ConfigValidationError { .. } => {
                "Check the TOML syntax and field names of the configuration file"
            }
            FixError::InvalidConfigValueError { .. } => {
                "Use relative file names with a .ts/.tsx/.js/.jsx/.mjs/.cjs extension"
            }
            FixError::MissingConfigError { .. } => "Add the missing field to the configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, FixError>;
