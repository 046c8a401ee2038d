//! Nonce 校验配置

use crate::DEFAULT_TIME_GAP_MS;
use serde::{Deserialize, Serialize};

/// 配置允许的最大时间差上限：1 天
const MAX_TIME_GAP_MS: u64 = 24 * 60 * 60 * 1000;

fn default_time_gap_ms() -> u64 {
    DEFAULT_TIME_GAP_MS
}

/// Nonce 校验配置
///
/// 对应配置文件中的 `[nonce]` 段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceValidatorConfig {
    /// 客户端时间与服务端时间允许的最大差值（毫秒）
    ///
    /// 默认 30000（30 秒）
    #[serde(default = "default_time_gap_ms")]
    pub time_gap_ms: u64,
}

impl Default for NonceValidatorConfig {
    fn default() -> Self {
        Self {
            time_gap_ms: default_time_gap_ms(),
        }
    }
}

impl NonceValidatorConfig {
    /// 校验配置取值
    ///
    /// 校验器本身不检查 time_gap，由加载配置的一方负责。
    pub fn validate(&self) -> Result<(), String> {
        if self.time_gap_ms == 0 {
            return Err("nonce.time_gap_ms must be greater than 0".to_string());
        }
        if self.time_gap_ms > MAX_TIME_GAP_MS {
            return Err(format!(
                "nonce.time_gap_ms must not exceed {MAX_TIME_GAP_MS} (got {})",
                self.time_gap_ms
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NonceValidatorConfig::default();
        assert_eq!(config.time_gap_ms, 30_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_missing_field() {
        let config: NonceValidatorConfig = toml::from_str("").unwrap();
        assert_eq!(config, NonceValidatorConfig::default());

        let config: NonceValidatorConfig = toml::from_str("time_gap_ms = 5000").unwrap();
        assert_eq!(config.time_gap_ms, 5_000);
    }

    #[test]
    fn test_validation() {
        let zero = NonceValidatorConfig { time_gap_ms: 0 };
        assert!(zero.validate().is_err());

        let huge = NonceValidatorConfig {
            time_gap_ms: MAX_TIME_GAP_MS + 1,
        };
        assert!(huge.validate().is_err());

        let max = NonceValidatorConfig {
            time_gap_ms: MAX_TIME_GAP_MS,
        };
        assert!(max.validate().is_ok());
    }

    #[test]
    fn test_negative_gap_rejected_by_deserializer() {
        assert!(toml::from_str::<NonceValidatorConfig>("time_gap_ms = -1").is_err());
    }
}
