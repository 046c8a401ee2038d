//! 时间源抽象
//!
//! 校验器不直接读取系统时间，而是持有一个 [`Clock`]，测试时可以注入固定时间。

use std::sync::Arc;

/// 毫秒精度的 Unix 时间源
pub trait Clock: Send + Sync {
    /// 当前 Unix 时间戳（毫秒）
    fn now_millis(&self) -> u64;
}

/// 系统墙上时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // 早于 1970 年的时钟读数按 0 处理
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// 固定时间的时钟
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(1_700_000_000_000);
        assert_eq!(clock.now_millis(), 1_700_000_000_000);
        assert_eq!(clock.now_millis(), clock.now_millis());
    }

    fn read<C: Clock>(clock: C) -> u64 {
        clock.now_millis()
    }

    #[test]
    fn test_shared_clock() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(42));
        assert_eq!(read(clock.clone()), 42);
        assert_eq!(read(&FixedClock(7)), 7);
    }
}
