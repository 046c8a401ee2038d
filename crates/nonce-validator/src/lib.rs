//! Nonce 时间窗口校验
//!
//! 客户端在请求头 `nonce` 中携带自己认为的当前时间（Unix 毫秒时间戳），
//! 服务端检查该时间是否落在 `[server_time - time_gap, server_time + time_gap]` 内。
//!
//! 只做新鲜度检查，不记录已使用的 nonce，因此不能保证 nonce 只被消费一次。

pub mod clock;
pub mod config;
pub mod error;
pub mod source;
mod validator;

// Re-export commonly used types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::NonceValidatorConfig;
pub use error::{NonceError, Result};
pub use source::NonceSource;
pub use validator::{NonceValidator, NonceWindow, parse_nonce};

/// 默认允许的时间差：30 秒
pub const DEFAULT_TIME_GAP_MS: u64 = 30_000;

/// 携带 nonce 的请求头名称
pub const NONCE_HEADER: &str = "nonce";
