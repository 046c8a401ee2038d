//! # nonce-guard
//!
//! 基于时间窗口的请求 nonce 校验：axum 中间件、配置加载与日志初始化。
//! 校验逻辑本身在 `nonce-validator` crate 中。

pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

// Re-export commonly used types
pub use config::{GuardConfig, LogConfig, ObservabilityConfig};
pub use error::{Error, Result};
pub use middleware::{NonceRejection, SharedValidator, protect, require_fresh_nonce};
pub use nonce_validator::{
    Clock, DEFAULT_TIME_GAP_MS, FixedClock, NONCE_HEADER, NonceError, NonceValidator,
    NonceValidatorConfig, NonceWindow, SystemClock,
};
pub use observability::{ObservabilityGuard, init_observability};
