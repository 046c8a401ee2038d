//! 统一错误处理模型

use thiserror::Error;

/// nonce-guard 顶层错误
#[derive(Debug, Error)]
pub enum Error {
    /// I/O 操作错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件解析失败
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// 配置校验失败
    #[error("Configuration validation failed: {}", .0.join("; "))]
    ConfigValidation(Vec<String>),

    /// 自定义错误消息
    #[error("Application error: {message}")]
    Custom { message: String },
}

/// nonce-guard 结果类型
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// 创建自定义错误
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_error() {
        let err = Error::custom("boom");
        assert_eq!(err.to_string(), "Application error: boom");
    }

    #[test]
    fn test_validation_error_joins_messages() {
        let err = Error::ConfigValidation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Configuration validation failed: a; b");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
