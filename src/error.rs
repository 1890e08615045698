use std::fmt;

/// MemoryMap 的统一错误类型
#[derive(Debug)]
pub enum MemoryMapError {
    /// LLM 相关错误
    Llm(LlmError),
    /// 记忆存储错误
    Store(StoreError),
    /// 配置错误
    Config(ConfigError),
    /// IO 错误
    Io(std::io::Error),
    /// 交互输入已关闭（stdin EOF）
    InputClosed,
    /// 其他错误
    Other(String),
}

/// LLM 相关错误
#[derive(Debug)]
pub enum LlmError {
    /// 网络请求失败
    NetworkError(String),
    /// API 返回错误状态码
    ApiError { status: u16, message: String },
    /// 响应格式无效
    InvalidResponse(String),
    /// 没有返回内容
    EmptyResponse,
}

/// 记忆存储错误
#[derive(Debug)]
pub enum StoreError {
    /// 读写文件失败
    IoError(String),
    /// 序列化失败
    SerializationError(String),
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),
    /// 配置解析失败
    ParseFailed(String),
    /// 未提供 API Key
    MissingApiKey,
    /// 配置值无效
    InvalidValue { field: String, message: String },
}

impl fmt::Display for MemoryMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryMapError::Llm(e) => write!(f, "LLM Error: {}", e),
            MemoryMapError::Store(e) => write!(f, "Store Error: {}", e),
            MemoryMapError::Config(e) => write!(f, "Config Error: {}", e),
            MemoryMapError::Io(e) => write!(f, "IO Error: {}", e),
            MemoryMapError::InputClosed => write!(f, "Input closed"),
            MemoryMapError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            LlmError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            LlmError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            LlmError::EmptyResponse => write!(f, "Empty response from LLM"),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(msg) => write!(f, "Store IO error: {}", msg),
            StoreError::SerializationError(msg) => write!(f, "Store serialization error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseFailed(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::MissingApiKey => {
                write!(f, "Missing API key (set OPENAI_API_KEY or pass --api-key)")
            }
            ConfigError::InvalidValue { field, message } => {
                write!(f, "Invalid config value for '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for MemoryMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MemoryMapError::Io(e) => Some(e),
            MemoryMapError::Llm(e) => Some(e),
            MemoryMapError::Store(e) => Some(e),
            MemoryMapError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for LlmError {}
impl std::error::Error for StoreError {}
impl std::error::Error for ConfigError {}

// From 转换实现
impl From<std::io::Error> for MemoryMapError {
    fn from(err: std::io::Error) -> Self {
        MemoryMapError::Io(err)
    }
}

impl From<reqwest::Error> for MemoryMapError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MemoryMapError::Llm(LlmError::NetworkError("Request timeout".to_string()))
        } else if err.is_connect() {
            MemoryMapError::Llm(LlmError::NetworkError(format!(
                "Connection failed: {}",
                err
            )))
        } else {
            MemoryMapError::Llm(LlmError::NetworkError(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for MemoryMapError {
    fn from(err: serde_json::Error) -> Self {
        MemoryMapError::Store(StoreError::SerializationError(err.to_string()))
    }
}

impl From<serde_yaml::Error> for MemoryMapError {
    fn from(err: serde_yaml::Error) -> Self {
        MemoryMapError::Config(ConfigError::ParseFailed(err.to_string()))
    }
}

impl From<LlmError> for MemoryMapError {
    fn from(err: LlmError) -> Self {
        MemoryMapError::Llm(err)
    }
}

impl From<StoreError> for MemoryMapError {
    fn from(err: StoreError) -> Self {
        MemoryMapError::Store(err)
    }
}

impl From<ConfigError> for MemoryMapError {
    fn from(err: ConfigError) -> Self {
        MemoryMapError::Config(err)
    }
}

// 便捷的 Result 类型别名
pub type Result<T> = std::result::Result<T, MemoryMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_errors() {
        let err: MemoryMapError = LlmError::ApiError {
            status: 401,
            message: "invalid key".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "LLM Error: API error (status 401): invalid key"
        );

        let err: MemoryMapError = ConfigError::MissingApiKey.into();
        assert!(err.to_string().starts_with("Config Error: Missing API key"));
    }

    #[test]
    fn test_json_error_maps_to_store_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: MemoryMapError = json_err.into();
        assert!(matches!(
            err,
            MemoryMapError::Store(StoreError::SerializationError(_))
        ));
    }
}
