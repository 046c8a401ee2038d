//! Nonce 校验器

use crate::DEFAULT_TIME_GAP_MS;
use crate::clock::{Clock, SystemClock};
use crate::config::NonceValidatorConfig;
use crate::error::{NonceError, Result};
use crate::source::NonceSource;

/// 允许的 nonce 区间，两端都包含
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonceWindow {
    pub start: u64,
    pub stop: u64,
}

impl NonceWindow {
    /// 以 `server_time` 为中心、`time_gap` 为半径的窗口
    ///
    /// 边界按饱和运算计算，不会回绕。
    pub fn around(server_time: u64, time_gap: u64) -> Self {
        Self {
            start: server_time.saturating_sub(time_gap),
            stop: server_time.saturating_add(time_gap),
        }
    }

    pub fn contains(&self, nonce: u64) -> bool {
        self.start <= nonce && nonce <= self.stop
    }
}

/// 按时间窗口校验 nonce
///
/// 构造后只读，可以放进 `Arc` 在多个请求处理任务之间共享。
#[derive(Debug, Clone)]
pub struct NonceValidator<C = SystemClock> {
    /// 客户端时间与服务端时间允许的最大差值（毫秒）
    time_gap: u64,
    clock: C,
}

impl NonceValidator<SystemClock> {
    /// 使用默认时间差（30 秒）
    pub fn new() -> Self {
        Self::with_time_gap(DEFAULT_TIME_GAP_MS)
    }

    /// 使用指定的时间差（毫秒）
    ///
    /// 不做范围检查，调用方负责选择合理的值。
    pub fn with_time_gap(time_gap: u64) -> Self {
        Self::with_clock(time_gap, SystemClock)
    }

    pub fn from_config(config: &NonceValidatorConfig) -> Self {
        Self::with_time_gap(config.time_gap_ms)
    }
}

impl Default for NonceValidator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NonceValidator<C> {
    /// 使用注入的时间源
    pub fn with_clock(time_gap: u64, clock: C) -> Self {
        Self { time_gap, clock }
    }

    pub fn time_gap(&self) -> u64 {
        self.time_gap
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// 给定服务端时间下允许的 nonce 区间
    pub fn window_at(&self, server_time: u64) -> NonceWindow {
        NonceWindow::around(server_time, self.time_gap)
    }

    /// 校验原始 nonce 字符串
    ///
    /// # Errors
    ///
    /// - [`NonceError::Parse`]：不是十进制 u64
    /// - [`NonceError::OutOfRange`]：不在当前时间窗口内
    pub fn validate(&self, raw: &str) -> Result<()> {
        let nonce = parse_nonce(raw)?;
        self.check(nonce, self.clock.now_millis())
    }

    /// 使用指定的服务端时间校验
    pub fn validate_at(&self, raw: &str, server_time: u64) -> Result<()> {
        let nonce = parse_nonce(raw)?;
        self.check(nonce, server_time)
    }

    /// 从 [`NonceSource`] 取出 nonce 后校验，缺失按空字符串处理
    pub fn validate_source<S: NonceSource + ?Sized>(&self, source: &S) -> Result<()> {
        self.validate(source.raw_nonce().unwrap_or_default())
    }

    fn check(&self, nonce: u64, server_time: u64) -> Result<()> {
        if self.window_at(server_time).contains(nonce) {
            Ok(())
        } else {
            Err(NonceError::OutOfRange)
        }
    }
}

/// 按十进制解析 nonce
pub fn parse_nonce(raw: &str) -> Result<u64> {
    // u64::from_str 接受前导 '+'，十进制无符号格式不允许
    let digits = if raw.starts_with('+') { "+" } else { raw };
    digits.parse::<u64>().map_err(|source| NonceError::Parse {
        value: raw.to_string(),
        source,
    })
}
