//! Nonce 校验错误类型

use std::num::ParseIntError;
use thiserror::Error;

/// Nonce 校验错误
///
/// 两种错误都是终止性的，校验器内部不会重试。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NonceError {
    /// nonce 缺失、格式错误或超出 u64 范围
    #[error("could not parse nonce in header: {source}")]
    Parse {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// nonce 解析成功，但不在允许的时间窗口内
    ///
    /// 不携带 nonce 或服务端时间，避免向调用方泄露服务端时钟。
    #[error("nonce submit is not in acceptable range")]
    OutOfRange,
}

/// Nonce 校验结果类型
pub type Result<T> = std::result::Result<T, NonceError>;

impl NonceError {
    /// 错误类别，用于日志字段
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::OutOfRange => "out_of_range",
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange)
    }
}
