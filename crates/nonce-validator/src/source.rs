//! nonce 的来源
//!
//! 校验器只需要一个字符串，不依赖具体的 HTTP 库。

/// 能提供原始 nonce 字符串的类型
pub trait NonceSource {
    /// 原始 nonce，缺失时返回 `None`
    fn raw_nonce(&self) -> Option<&str>;
}

impl NonceSource for str {
    fn raw_nonce(&self) -> Option<&str> {
        Some(self)
    }
}

impl NonceSource for String {
    fn raw_nonce(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: AsRef<str>> NonceSource for Option<T> {
    fn raw_nonce(&self) -> Option<&str> {
        self.as_ref().map(|value| value.as_ref())
    }
}

/// 从请求头 `nonce` 读取，非 UTF-8 的值视为缺失
#[cfg(feature = "http")]
impl NonceSource for http::HeaderMap {
    fn raw_nonce(&self) -> Option<&str> {
        self.get(crate::NONCE_HEADER)
            .and_then(|value| value.to_str().ok())
    }
}
