use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Arithmetic overflow: {lhs} {operation} {rhs}")]
    ArithmeticOverflow {
        operation: &'static str,
        lhs: i64,
        rhs: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ScriptError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ScriptError::IoError(_) => ErrorSeverity::Critical,
            ScriptError::SerializationError(_) => ErrorSeverity::High,
            ScriptError::ConfigParseError { .. } => ErrorSeverity::High,
            ScriptError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ScriptError::ArithmeticOverflow { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScriptError::IoError(e) => format!("無法讀寫檔案或輸出: {}", e),
            ScriptError::SerializationError(e) => format!("輸出序列化失敗: {}", e),
            ScriptError::ConfigParseError { message, .. } => {
                format!("配置檔格式錯誤: {}", message)
            }
            ScriptError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置值 {} 無效: {}", field, reason)
            }
            ScriptError::ArithmeticOverflow { operation, lhs, rhs } => {
                format!("計算 {} {} {} 時溢位", lhs, operation, rhs)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScriptError::IoError(_) => "檢查檔案路徑與權限",
            ScriptError::SerializationError(_) => "改用純文字輸出 (移除 --json)",
            ScriptError::ConfigParseError { .. } => "確認配置檔為有效的 TOML 格式",
            ScriptError::InvalidConfigValueError { .. } => "修正配置檔中的欄位值後重試",
            ScriptError::ArithmeticOverflow { .. } => "使用較小的數值",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
